//! Bearer token middleware and the auth extractors.
//!
//! The middleware validates `Authorization: Bearer <token>` headers
//! through the `TokenValidator` port and stashes the resulting
//! [`AuthenticatedUser`] in request extensions. Requests without a
//! token pass through untouched so anonymous chat routes keep working;
//! handlers opt in to enforcement with [`RequireAuth`] or read the
//! optional identity with [`OptionalAuth`].
//!
//! ```ignore
//! let validator: AuthState = Arc::new(JwtTokenValidator::new(secret));
//!
//! let app = Router::new()
//!     .nest("/api/dashboard", dashboard_routes(handlers))
//!     .layer(middleware::from_fn_with_state(validator, auth_middleware));
//! ```

use std::convert::Infallible;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{request::Parts, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::foundation::{AuthError, AuthenticatedUser, ErrorCode};
use crate::ports::TokenValidator;

/// State handed to `auth_middleware`.
pub type AuthState = Arc<dyn TokenValidator>;

/// Validates the Bearer token, if any, and records the caller identity.
///
/// Invalid or expired tokens are rejected with 401 rather than treated
/// as anonymous, so a client with a stale token hears about it instead
/// of silently losing access to its data.
pub async fn auth_middleware(
    State(validator): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let bearer = request
        .headers()
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    let token = match bearer {
        Some(token) => token,
        None => return next.run(request).await,
    };

    match validator.validate(token).await {
        Ok(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(AuthError::ServiceUnavailable(reason)) => {
            tracing::error!(%reason, "Token validation unavailable");
            reject(
                StatusCode::SERVICE_UNAVAILABLE,
                "SERVICE_UNAVAILABLE",
                "Authentication service unavailable",
            )
        }
        Err(AuthError::TokenExpired) => reject(
            StatusCode::UNAUTHORIZED,
            ErrorCode::Unauthorized.as_str(),
            "Token expired",
        ),
        Err(AuthError::InvalidToken) => reject(
            StatusCode::UNAUTHORIZED,
            ErrorCode::Unauthorized.as_str(),
            "Invalid token",
        ),
    }
}

fn reject(status: StatusCode, code: &str, message: &str) -> Response {
    (
        status,
        Json(serde_json::json!({ "code": code, "message": message })),
    )
        .into_response()
}

/// Extractor for routes that demand a caller identity.
///
/// Rejects with 401 when the middleware put no user in the extensions,
/// which covers both "no token" and "the middleware never ran".
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedUser);

#[async_trait]
impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(RequireAuth)
            .ok_or(AuthRejection)
    }
}

/// Extractor for routes that work with or without a caller identity.
///
/// The chat start route uses this to attach an owner to the session
/// when one is logged in while still serving anonymous visitors.
#[derive(Debug, Clone)]
pub struct OptionalAuth(pub Option<AuthenticatedUser>);

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuth
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(OptionalAuth(
            parts.extensions.get::<AuthenticatedUser>().cloned(),
        ))
    }
}

/// Rejection emitted by [`RequireAuth`].
#[derive(Debug, Clone)]
pub struct AuthRejection;

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        reject(
            StatusCode::UNAUTHORIZED,
            ErrorCode::Unauthorized.as_str(),
            "Authentication required",
        )
    }
}
