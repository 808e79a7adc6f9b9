//! Domain error vocabulary.
//!
//! Every error that crosses a module boundary carries an [`ErrorCode`];
//! the HTTP layer maps codes to status codes in one place, so new
//! domain errors only need a code to pick up the right wire behavior.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors raised while constructing value objects.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },
}

impl ValidationError {
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField {
            field: field.into(),
        }
    }
}

/// Machine-readable error codes, grouped by concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation
    ValidationFailed,
    EmptyField,
    InvalidFormat,

    // Questionnaire state
    SessionNotFound,
    InvalidStep,
    SessionArchived,

    // Access
    Unauthorized,

    // Infrastructure
    DatabaseError,
    InternalError,
}

impl ErrorCode {
    /// The SCREAMING_SNAKE form clients see on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::SessionNotFound => "SESSION_NOT_FOUND",
            ErrorCode::InvalidStep => "INVALID_STEP",
            ErrorCode::SessionArchived => "SESSION_ARCHIVED",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A coded error with a human message and optional key/value details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Validation failure tied to a named field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message).with_detail("field", field)
    }

    /// Attaches a detail entry, consuming and returning the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_field_names_the_field() {
        let err = ValidationError::empty_field("message");
        assert_eq!(err.to_string(), "Field 'message' cannot be empty");
    }

    #[test]
    fn codes_render_in_screaming_snake() {
        assert_eq!(ErrorCode::SessionNotFound.as_str(), "SESSION_NOT_FOUND");
        assert_eq!(ErrorCode::InvalidStep.to_string(), "INVALID_STEP");
        assert_eq!(ErrorCode::Unauthorized.as_str(), "UNAUTHORIZED");
    }

    #[test]
    fn domain_error_display_prefixes_the_code() {
        let err = DomainError::new(ErrorCode::SessionNotFound, "Chat session not found");
        assert_eq!(err.to_string(), "[SESSION_NOT_FOUND] Chat session not found");
    }

    #[test]
    fn validation_helper_records_the_field_as_detail() {
        let err = DomainError::validation("message", "Message is required");
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("field"), Some(&"message".to_string()));
    }

    #[test]
    fn details_accumulate() {
        let err = DomainError::new(ErrorCode::InvalidStep, "Step out of range")
            .with_detail("step", "9")
            .with_detail("max", "5");
        assert_eq!(err.details.len(), 2);
        assert_eq!(err.details.get("step"), Some(&"9".to_string()));
    }
}
