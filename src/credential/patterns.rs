use lazy_static::lazy_static;
use log::debug;
use regex::{Regex, RegexBuilder};
use std::fmt;

use crate::credential::validation::ValidatorError;

/// Username: a letter followed by 2-31 letters, digits, `_`, `.` or `-`
pub const USERNAME_PATTERN: &str = r"^[A-Za-z][A-Za-z0-9_.-]{2,31}$";

/// Email regex pattern for validation
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

/// Password: 8 to 64 printable ASCII characters, no whitespace
pub const PASSWORD_PATTERN: &str = r"^[!-~]{8,64}$";

// Default patterns shared by every validator in the process
lazy_static! {
    pub static ref USERNAME_REGEX: Regex =
        Regex::new(USERNAME_PATTERN).expect("default username pattern must compile");
    pub static ref EMAIL_REGEX: Regex =
        Regex::new(EMAIL_PATTERN).expect("default email pattern must compile");
    pub static ref PASSWORD_REGEX: Regex =
        Regex::new(PASSWORD_PATTERN).expect("default password pattern must compile");
}

/// The credential field a pattern applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    Email,
    Password,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Username, Field::Email, Field::Password];
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Username => f.pad("username"),
            Field::Email => f.pad("email"),
            Field::Password => f.pad("password"),
        }
    }
}

/// Get a fresh copy of the default pattern for a field
pub fn default_regex(field: Field) -> Regex {
    match field {
        Field::Username => USERNAME_REGEX.clone(),
        Field::Email => EMAIL_REGEX.clone(),
        Field::Password => PASSWORD_REGEX.clone(),
    }
}

/// Parse a regular-expression literal of the form `/body/flags`.
///
/// Supported flags:
/// - `i` case-insensitive
/// - `m` multi-line anchors
/// - `s` `.` matches `\n`
/// - `x` ignore whitespace and `#` comments in the body
/// - `u` accepted, matching is always Unicode-aware
/// - `g`, `y` accepted and ignored, matching is stateless
///
/// Anything else, including a bare string without delimiters, is rejected.
///
/// Unlike a JavaScript `RegExp`, classes such as `\d`, `\w` and `\s` are
/// Unicode-aware even without `u`: `/^\d+$/` matches `"٣"`. Write `[0-9]`
/// or prefix the body with `(?-u)` for ASCII-only classes.
pub fn parse_pattern(literal: &str) -> Result<Regex, ValidatorError> {
    let rest = literal.strip_prefix('/').ok_or_else(invalid_regexp)?;
    let close = rest.rfind('/').ok_or_else(invalid_regexp)?;
    let (body, flags) = (&rest[..close], &rest[close + 1..]);

    if body.is_empty() {
        return Err(invalid_regexp());
    }

    let mut builder = RegexBuilder::new(body);
    let mut seen = String::new();
    for flag in flags.chars() {
        if seen.contains(flag) {
            return Err(invalid_regexp());
        }
        seen.push(flag);

        match flag {
            'i' => {
                builder.case_insensitive(true);
            }
            'm' => {
                builder.multi_line(true);
            }
            's' => {
                builder.dot_matches_new_line(true);
            }
            'x' => {
                builder.ignore_whitespace(true);
            }
            'u' | 'g' | 'y' => {}
            _ => return Err(invalid_regexp()),
        }
    }

    let regex = builder.build().map_err(|e| {
        debug!("Pattern body failed to compile: {}", e);
        invalid_regexp()
    })?;

    Ok(regex)
}

fn invalid_regexp() -> ValidatorError {
    ValidatorError::InvalidArgument(crate::credential::INVALID_REGEXP_MESSAGE.to_string())
}
