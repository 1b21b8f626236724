//! Credential validation helpers.
//!
//! A [`Validator`] wraps a username/email/password [`Credential`] and checks
//! each field against a configurable regular expression.

pub mod cli;
pub mod config;
pub mod credential;

pub use credential::{Credential, Field, FieldStatus, ValidationReport, Validator, ValidatorError};
