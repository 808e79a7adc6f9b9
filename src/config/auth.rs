//! Authentication configuration

use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// JWT validation configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AuthConfig {
    /// Secret used to verify JWT signatures
    #[serde(default)]
    pub jwt_secret: String,
}

impl AuthConfig {
    /// Validate auth configuration.
    ///
    /// Any non-empty secret passes in development; production requires
    /// at least 32 bytes.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.jwt_secret.is_empty() {
            return Err(ValidationError::MissingRequired("JWT_SECRET"));
        }
        if *environment == Environment::Production && self.jwt_secret.len() < 32 {
            return Err(ValidationError::WeakJwtSecret);
        }
        Ok(())
    }
}
