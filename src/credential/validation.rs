use log::{debug, warn};
use regex::Regex;
use serde::Serialize;
use std::fmt;

use crate::config::PatternConfig;
use crate::credential::patterns::{default_regex, parse_pattern, Field};
use crate::credential::Credential;

/// Validator error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidatorError {
    #[error("{0}")]
    InvalidArgument(String),
}

/// Outcome of checking a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldStatus {
    Valid,
    Invalid,
    Missing,
}

impl From<Option<bool>> for FieldStatus {
    fn from(result: Option<bool>) -> Self {
        match result {
            Some(true) => FieldStatus::Valid,
            Some(false) => FieldStatus::Invalid,
            None => FieldStatus::Missing,
        }
    }
}

impl fmt::Display for FieldStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldStatus::Valid => write!(f, "valid"),
            FieldStatus::Invalid => write!(f, "invalid"),
            FieldStatus::Missing => write!(f, "missing"),
        }
    }
}

/// Per-field results for one credential
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub username: FieldStatus,
    pub email: FieldStatus,
    pub password: FieldStatus,
}

impl ValidationReport {
    pub fn status(&self, field: Field) -> FieldStatus {
        match field {
            Field::Username => self.username,
            Field::Email => self.email,
            Field::Password => self.password,
        }
    }

    /// True only when every field is present and matches its pattern
    pub fn is_valid(&self) -> bool {
        self.failed_fields().is_empty()
    }

    pub fn failed_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| self.status(*field) != FieldStatus::Valid)
            .collect()
    }
}

/// Checks a credential's fields against configurable patterns
#[derive(Debug, Clone)]
pub struct Validator {
    credential: Credential,
    username_regex: Regex,
    email_regex: Regex,
    password_regex: Regex,
}

impl Validator {
    /// Create a validator using the default patterns. The raw values are not
    /// checked until one of the `validate_*` methods is called.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            credential: Credential::new(username, email, password),
            username_regex: default_regex(Field::Username),
            email_regex: default_regex(Field::Email),
            password_regex: default_regex(Field::Password),
        }
    }

    /// Create a validator and apply any pattern overrides from configuration
    pub fn with_patterns(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        patterns: &PatternConfig,
    ) -> Result<Self, ValidatorError> {
        let mut validator = Self::new(username, email, password);
        validator.set_username_pattern(patterns.username.as_deref())?;
        validator.set_email_pattern(patterns.email.as_deref())?;
        validator.set_password_pattern(patterns.password.as_deref())?;
        Ok(validator)
    }

    /// Get the credential held by this validator
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// `None` when the username is empty, otherwise whether it matches
    pub fn validate_username(&self) -> Option<bool> {
        check(Field::Username, &self.username_regex, self.credential.username())
    }

    /// `None` when the email is empty, otherwise whether it matches
    pub fn validate_email(&self) -> Option<bool> {
        check(Field::Email, &self.email_regex, self.credential.email())
    }

    /// `None` when the password is empty, otherwise whether it matches
    pub fn validate_password(&self) -> Option<bool> {
        check(Field::Password, &self.password_regex, self.credential.password())
    }

    pub fn validate(&self, field: Field) -> Option<bool> {
        match field {
            Field::Username => self.validate_username(),
            Field::Email => self.validate_email(),
            Field::Password => self.validate_password(),
        }
    }

    /// Validate all three fields at once
    pub fn report(&self) -> ValidationReport {
        ValidationReport {
            username: self.validate_username().into(),
            email: self.validate_email().into(),
            password: self.validate_password().into(),
        }
    }

    pub fn username_regex(&self) -> &Regex {
        &self.username_regex
    }

    pub fn email_regex(&self) -> &Regex {
        &self.email_regex
    }

    pub fn password_regex(&self) -> &Regex {
        &self.password_regex
    }

    pub fn regex(&self, field: Field) -> &Regex {
        match field {
            Field::Username => &self.username_regex,
            Field::Email => &self.email_regex,
            Field::Password => &self.password_regex,
        }
    }

    /// Replace the username pattern, or restore the default with `None`
    pub fn set_username_regex(&mut self, regex: Option<Regex>) {
        self.set_regex(Field::Username, regex);
    }

    /// Replace the email pattern, or restore the default with `None`
    pub fn set_email_regex(&mut self, regex: Option<Regex>) {
        self.set_regex(Field::Email, regex);
    }

    /// Replace the password pattern, or restore the default with `None`
    pub fn set_password_regex(&mut self, regex: Option<Regex>) {
        self.set_regex(Field::Password, regex);
    }

    /// Replace the username pattern from a `/body/flags` literal
    pub fn set_username_pattern(&mut self, literal: Option<&str>) -> Result<(), ValidatorError> {
        self.set_pattern(Field::Username, literal)
    }

    /// Replace the email pattern from a `/body/flags` literal
    pub fn set_email_pattern(&mut self, literal: Option<&str>) -> Result<(), ValidatorError> {
        self.set_pattern(Field::Email, literal)
    }

    /// Replace the password pattern from a `/body/flags` literal
    pub fn set_password_pattern(&mut self, literal: Option<&str>) -> Result<(), ValidatorError> {
        self.set_pattern(Field::Password, literal)
    }

    /// Replace the pattern for `field`. On error the current pattern is kept.
    pub fn set_pattern(&mut self, field: Field, literal: Option<&str>) -> Result<(), ValidatorError> {
        let regex = match literal {
            Some(literal) => Some(parse_pattern(literal).map_err(|e| {
                warn!("Rejected {} pattern input: {}", field, e);
                e
            })?),
            None => None,
        };

        self.set_regex(field, regex);
        Ok(())
    }

    pub fn set_regex(&mut self, field: Field, regex: Option<Regex>) {
        let regex = match regex {
            Some(regex) => {
                debug!("Setting {} pattern to {}", field, regex.as_str());
                regex
            }
            None => {
                debug!("Restoring default {} pattern", field);
                default_regex(field)
            }
        };

        match field {
            Field::Username => self.username_regex = regex,
            Field::Email => self.email_regex = regex,
            Field::Password => self.password_regex = regex,
        }
    }
}

fn check(field: Field, regex: &Regex, value: &str) -> Option<bool> {
    if value.is_empty() {
        debug!("No {} to validate", field);
        return None;
    }

    let matched = regex.is_match(value);
    debug!("Validated {}: {}", field, if matched { "match" } else { "no match" });
    Some(matched)
}
