//! Shared HTTP error envelope.
//!
//! Every module speaks `ErrorCode` at the domain boundary, so the HTTP
//! layer keeps a single envelope and one code-to-status mapping instead
//! of per-area error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Standard error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

/// Maps a domain error code to the HTTP status it travels under.
pub fn status_for_code(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed
        | ErrorCode::EmptyField
        | ErrorCode::InvalidFormat
        | ErrorCode::InvalidStep
        | ErrorCode::SessionArchived => StatusCode::BAD_REQUEST,
        ErrorCode::SessionNotFound => StatusCode::NOT_FOUND,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::DatabaseError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Builds the full error response for a code and message.
pub fn error_response(code: ErrorCode, message: impl Into<String>) -> Response {
    (status_for_code(code), Json(ErrorResponse::new(code, message))).into_response()
}

/// Builds the error response for a `DomainError`, carrying its details.
pub fn domain_error_response(error: DomainError) -> Response {
    let status = status_for_code(error.code);
    let details = if error.details.is_empty() {
        None
    } else {
        serde_json::to_value(&error.details).ok()
    };
    let body = ErrorResponse {
        code: error.code.to_string(),
        message: error.message,
        details,
    };
    (status, Json(body)).into_response()
}
