//! HTTP routes for monitor endpoints.

use axum::{routing::get, Router};
use once_cell::sync::Lazy;

use super::handlers::{health, service_info, MonitorState, STARTED_AT};

/// Creates the monitor router with all endpoints.
pub fn monitor_routes(state: MonitorState) -> Router {
    Lazy::force(&STARTED_AT);
    Router::new()
        .route("/health", get(health))
        .route("/info", get(service_info))
        .with_state(state)
}
