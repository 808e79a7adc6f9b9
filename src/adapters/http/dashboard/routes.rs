//! HTTP routes for dashboard endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_dashboard_metrics, DashboardHandlers};

/// Creates the dashboard router with all endpoints.
pub fn dashboard_routes(handlers: DashboardHandlers) -> Router {
    Router::new()
        .route("/metrics", get(get_dashboard_metrics))
        .with_state(handlers)
}
