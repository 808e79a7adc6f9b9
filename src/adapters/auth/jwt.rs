//! JWT adapter for bearer token validation.
//!
//! This adapter implements the `TokenValidator` port for HS256 tokens
//! signed with a shared secret. It validates the signature and expiry,
//! then maps the claims to the domain `AuthenticatedUser` type.
//!
//! # Example
//!
//! ```ignore
//! use salomao::adapters::auth::JwtTokenValidator;
//!
//! let validator = JwtTokenValidator::new(Secret::new(jwt_secret));
//! let user = validator.validate("eyJ...").await?;
//! ```

use async_trait::async_trait;
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::TokenValidator;

/// Claims expected in a signed token.
///
/// Expiry is enforced by the library during decode, so only the claims
/// mapped into `AuthenticatedUser` appear here.
#[derive(Debug, Deserialize)]
struct Claims {
    /// Subject - the user ID
    sub: String,

    /// User's email address
    #[serde(default)]
    email: Option<String>,

    /// User's display name
    #[serde(default)]
    name: Option<String>,
}

/// Shared-secret JWT validator.
pub struct JwtTokenValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtTokenValidator {
    /// Creates a validator for tokens signed with the given secret.
    pub fn new(secret: Secret<String>) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.expose_secret().as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }
}

#[async_trait]
impl TokenValidator for JwtTokenValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                    _ => AuthError::InvalidToken,
                }
            })?;

        let user_id = UserId::new(data.claims.sub).map_err(|_| AuthError::InvalidToken)?;

        Ok(AuthenticatedUser::new(
            user_id,
            data.claims.email,
            data.claims.name,
        ))
    }
}
