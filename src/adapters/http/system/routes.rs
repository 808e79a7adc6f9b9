//! HTTP routes for system endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create_from_chat, list_systems, SystemHandlers};

/// Creates the system router with all endpoints.
pub fn system_routes(handlers: SystemHandlers) -> Router {
    Router::new()
        .route("/", get(list_systems))
        .route("/create-from-chat", post(create_from_chat))
        .with_state(handlers)
}
