//! HTTP routes for lead endpoints.

use axum::{routing::get, Router};

use super::handlers::{list_leads, recent_leads, LeadHandlers};

/// Creates the lead router with all endpoints.
pub fn lead_routes(handlers: LeadHandlers) -> Router {
    Router::new()
        .route("/", get(list_leads))
        .route("/recent", get(recent_leads))
        .with_state(handlers)
}
