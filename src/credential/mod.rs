// Credential validation module
// This module holds the credential triplet, the default validation patterns,
// and the validator that checks each field against its pattern.

mod patterns;
mod validation;

pub use patterns::{
    default_regex, parse_pattern, Field,
    EMAIL_PATTERN, EMAIL_REGEX, PASSWORD_PATTERN, PASSWORD_REGEX,
    USERNAME_PATTERN, USERNAME_REGEX,
};
pub use validation::{FieldStatus, ValidationReport, Validator, ValidatorError};

use std::fmt;

/// Message carried by every rejected pattern input
pub const INVALID_REGEXP_MESSAGE: &str = "Input must be a valid regexp";

/// A username/email/password triplet
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    username: String,
    email: String,
    password: String,
}

impl Credential {
    /// Create a new credential from raw, unvalidated values
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// The password never shows up in logs or panic messages
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_accessors() {
        let credential = Credential::new("jdoe", "jdoe@example.com", "P@ssw0rd!");
        assert_eq!(credential.username(), "jdoe");
        assert_eq!(credential.email(), "jdoe@example.com");
        assert_eq!(credential.password(), "P@ssw0rd!");
    }

    #[test]
    fn test_credential_debug_redacts_password() {
        let credential = Credential::new("jdoe", "jdoe@example.com", "P@ssw0rd!");
        let debug = format!("{:?}", credential);
        assert!(debug.contains("jdoe@example.com"));
        assert!(!debug.contains("P@ssw0rd!"));
        assert!(debug.contains("<redacted>"));
    }
}
