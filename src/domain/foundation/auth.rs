//! Caller identity as the domain sees it.
//!
//! A `TokenValidator` adapter turns a bearer token into an
//! [`AuthenticatedUser`]; nothing in here knows which token scheme
//! produced it.

use super::UserId;
use thiserror::Error;

/// The identity extracted from a validated token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// Subject claim.
    pub id: UserId,
    /// Email claim, when the token carries one.
    pub email: Option<String>,
    /// Name claim, when the token carries one.
    pub display_name: Option<String>,
}

impl AuthenticatedUser {
    pub fn new(id: UserId, email: Option<String>, display_name: Option<String>) -> Self {
        Self {
            id,
            email,
            display_name,
        }
    }

    /// Best label available for logs and greetings: name, then email,
    /// then the raw subject.
    pub fn display_label(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or_else(|| self.id.as_str())
    }
}

/// Token validation failures.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Malformed token, bad signature, or claims that do not parse.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Structurally valid token past its expiry.
    #[error("Token expired")]
    TokenExpired,

    /// The validator itself could not do its job.
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }
}
