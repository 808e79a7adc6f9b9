//! HTTP handlers for lead endpoints.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::domain_error_response;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::lead::{ListLeadsHandler, ListLeadsQuery};

use super::dto::{LeadResponse, RecentLeadsQuery};

/// Default window for the recent leads endpoint.
const DEFAULT_RECENT_LIMIT: usize = 10;

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct LeadHandlers {
    list_handler: Arc<ListLeadsHandler>,
}

impl LeadHandlers {
    pub fn new(list_handler: Arc<ListLeadsHandler>) -> Self {
        Self { list_handler }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/leads - All the caller's leads, newest first
pub async fn list_leads(
    State(handlers): State<LeadHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = ListLeadsQuery {
        user_id: user.id,
        limit: None,
    };

    match handlers.list_handler.handle(query).await {
        Ok(leads) => {
            let response: Vec<LeadResponse> = leads.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/leads/recent?limit=N - The caller's most recent leads
pub async fn recent_leads(
    State(handlers): State<LeadHandlers>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<RecentLeadsQuery>,
) -> Response {
    let query = ListLeadsQuery {
        user_id: user.id,
        limit: Some(params.limit.unwrap_or(DEFAULT_RECENT_LIMIT)),
    };

    match handlers.list_handler.handle(query).await {
        Ok(leads) => {
            let response: Vec<LeadResponse> = leads.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}
