//! Artifact generator port - interface for system generation.
//!
//! This port abstracts the model-backed generation of a sales system
//! from the questionnaire answers. Implementations exist for OpenAI and
//! for deterministic mocks in tests.
//!
//! # Contract
//!
//! Generation failure never blocks the wizard: callers treat any `Err`
//! as a signal to fall back to the deterministic artifact built from
//! the profile. Implementations should therefore classify failures
//! rather than retry indefinitely.

use async_trait::async_trait;

use crate::domain::chat::SystemData;
use crate::domain::system::GeneratedSystem;

/// Port for generating a system artifact from collected answers.
#[async_trait]
pub trait ArtifactGenerator: Send + Sync {
    /// Generate a system artifact for the given profile.
    ///
    /// The profile may be partially filled; implementations use
    /// whatever answers are present.
    async fn generate(&self, profile: &SystemData) -> Result<GeneratedSystem, GenerationError>;
}

/// Artifact generation errors.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// Rate limited by the provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds until retry is allowed.
        retry_after_secs: u32,
    },

    /// Provider is unavailable.
    #[error("provider unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Network error during the request.
    #[error("network error: {0}")]
    Network(String),

    /// Provider replied, but not with a usable artifact.
    #[error("malformed output: {0}")]
    MalformedOutput(String),

    /// Invalid request configuration.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u32,
    },
}

impl GenerationError {
    /// Creates a rate limited error.
    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a malformed output error.
    pub fn malformed_output(message: impl Into<String>) -> Self {
        Self::MalformedOutput(message.into())
    }

    /// Creates an invalid request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Returns true if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            GenerationError::RateLimited { .. }
                | GenerationError::Unavailable { .. }
                | GenerationError::Network(_)
                | GenerationError::Timeout { .. }
        )
    }
}
