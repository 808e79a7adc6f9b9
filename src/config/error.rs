//! Failure modes for loading and validating configuration.

use thiserror::Error;

/// Anything that can stop configuration from coming up at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The environment could not be read or deserialized into sections.
    #[error("Failed to read configuration from the environment: {0}")]
    LoadError(#[from] config::ConfigError),

    /// The values deserialized fine but broke a semantic rule.
    #[error("Configuration rejected: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// A semantic rule the section types alone cannot enforce.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required setting: {0}")]
    MissingRequired(&'static str),

    #[error("Server port must be non-zero")]
    InvalidPort,

    #[error("Request timeout must be between 1 and 300 seconds")]
    InvalidTimeout,

    #[error("Database URL must start with postgres:// or postgresql://")]
    InvalidDatabaseUrl,

    #[error("Pool min_connections cannot exceed max_connections")]
    InvalidPoolSize,

    #[error("Pool max_connections cannot exceed 100")]
    PoolSizeTooLarge,

    #[error("JWT secret shorter than 32 bytes is not allowed in production")]
    WeakJwtSecret,
}
