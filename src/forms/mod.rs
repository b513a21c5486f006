//! Form submission gating
//!
//! Every create or update goes through a form first. `validate()` either
//! produces a draft ready to submit or a list of field errors; a failed
//! gate is a local no-op and must never reach the network.

pub mod client;
pub mod session;
pub mod trainer;

pub use client::ClientForm;
pub use session::SessionForm;
pub use trainer::TrainerForm;

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::OpenTrainerError;

/// One failed check, tied to the form field that caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Form field name.
    pub field: &'static str,
    /// Human-readable message for inline display.
    pub message: String,
}

impl FieldError {
    /// Standard "required" error for an empty field.
    pub fn required(field: &'static str) -> Self {
        Self {
            field,
            message: "required".to_string(),
        }
    }

    /// Error with a custom message.
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Collapse field errors into a single summary line.
pub fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(FieldError::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Convert gate failures into the crate error type for propagation.
pub fn validation_error(errors: Vec<FieldError>) -> anyhow::Error {
    OpenTrainerError::Validation(summarize(&errors)).into()
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"))
}

/// Check a required free-text field, pushing an error when empty.
pub(crate) fn check_required(field: &'static str, value: &str, errors: &mut Vec<FieldError>) {
    if value.trim().is_empty() {
        errors.push(FieldError::required(field));
    }
}

/// Check a required email field: must be present and well-formed.
pub(crate) fn check_email(field: &'static str, value: &str, errors: &mut Vec<FieldError>) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(FieldError::required(field));
    } else if !email_regex().is_match(trimmed) {
        errors.push(FieldError::invalid(field, "not a valid email address"));
    }
}
