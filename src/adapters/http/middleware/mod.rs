//! HTTP middleware.
//!
//! Currently just bearer token authentication; the extractors live
//! next to the middleware that feeds them.

mod auth;

pub use auth::{auth_middleware, AuthRejection, AuthState, OptionalAuth, RequireAuth};
