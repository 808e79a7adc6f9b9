//! System-specific error types.

use crate::domain::foundation::{ChatSessionId, DomainError, ErrorCode};

/// System-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemError {
    /// Chat session to publish from was not found.
    SessionNotFound(ChatSessionId),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl SystemError {
    pub fn session_not_found(id: ChatSessionId) -> Self {
        SystemError::SessionNotFound(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        SystemError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        SystemError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            SystemError::SessionNotFound(_) => ErrorCode::SessionNotFound,
            SystemError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            SystemError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            SystemError::SessionNotFound(id) => format!("Chat session not found: {}", id),
            SystemError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            SystemError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for SystemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SystemError {}

impl From<DomainError> for SystemError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => SystemError::ValidationFailed {
                field: "unknown".to_string(),
                message: err.to_string(),
            },
            _ => SystemError::Infrastructure(err.to_string()),
        }
    }
}
