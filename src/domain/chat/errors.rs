//! Chat-specific error types.

use crate::domain::foundation::{ChatSessionId, DomainError, ErrorCode};

/// Chat-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// Chat session was not found.
    NotFound(ChatSessionId),
    /// Turn message was missing or blank.
    MissingMessage,
    /// Stored step is outside the questionnaire range.
    InvalidStep(u8),
    /// Session is archived and rejects further turns.
    Archived,
    /// Infrastructure error.
    Infrastructure(String),
}

impl ChatError {
    pub fn not_found(id: ChatSessionId) -> Self {
        ChatError::NotFound(id)
    }
    pub fn invalid_step(step: u8) -> Self {
        ChatError::InvalidStep(step)
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        ChatError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            ChatError::NotFound(_) => ErrorCode::SessionNotFound,
            ChatError::MissingMessage => ErrorCode::EmptyField,
            ChatError::InvalidStep(_) => ErrorCode::InvalidStep,
            ChatError::Archived => ErrorCode::SessionArchived,
            ChatError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            ChatError::NotFound(id) => format!("Chat session not found: {}", id),
            ChatError::MissingMessage => "Message is required".to_string(),
            ChatError::InvalidStep(step) => {
                format!("Session step {} is outside the questionnaire range", step)
            }
            ChatError::Archived => "Cannot send messages to an archived session".to_string(),
            ChatError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ChatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ChatError {}

impl From<DomainError> for ChatError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::SessionArchived => ChatError::Archived,
            _ => ChatError::Infrastructure(err.to_string()),
        }
    }
}
