//! HTTP handlers for dashboard endpoints.
//!
//! `DashboardMetrics` already serializes in the wire shape, so this area
//! has no DTO layer of its own.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::domain_error_response;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::dashboard::{
    GetDashboardMetricsHandler, GetDashboardMetricsQuery,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct DashboardHandlers {
    metrics_handler: Arc<GetDashboardMetricsHandler>,
}

impl DashboardHandlers {
    pub fn new(metrics_handler: Arc<GetDashboardMetricsHandler>) -> Self {
        Self { metrics_handler }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/dashboard/metrics - Headline numbers for the caller
pub async fn get_dashboard_metrics(
    State(handlers): State<DashboardHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = GetDashboardMetricsQuery { user_id: user.id };

    match handlers.metrics_handler.handle(query).await {
        Ok(metrics) => (StatusCode::OK, Json(metrics)).into_response(),
        Err(e) => domain_error_response(e),
    }
}
