//! HTTP handlers for system endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use crate::adapters::http::error::{domain_error_response, error_response};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::system::{
    ListSystemsHandler, ListSystemsQuery, PublishSystemCommand, PublishSystemHandler,
};
use crate::domain::foundation::{ChatSessionId, ErrorCode};
use crate::domain::system::SystemError;

use super::dto::{CreateFromChatRequest, SystemResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SystemHandlers {
    publish_handler: Arc<PublishSystemHandler>,
    list_handler: Arc<ListSystemsHandler>,
}

impl SystemHandlers {
    pub fn new(
        publish_handler: Arc<PublishSystemHandler>,
        list_handler: Arc<ListSystemsHandler>,
    ) -> Self {
        Self {
            publish_handler,
            list_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/systems/create-from-chat - Publish a system from a session
pub async fn create_from_chat(
    State(handlers): State<SystemHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<CreateFromChatRequest>,
) -> Response {
    let session_id = match req.session_id.as_deref() {
        Some(raw) if !raw.is_empty() => match raw.parse::<ChatSessionId>() {
            Ok(id) => id,
            Err(_) => return error_response(ErrorCode::InvalidFormat, "Invalid session ID"),
        },
        _ => return error_response(ErrorCode::EmptyField, "Session ID is required"),
    };

    let cmd = PublishSystemCommand {
        user_id: user.id,
        session_id,
    };

    match handlers.publish_handler.handle(cmd).await {
        Ok(system) => {
            info!(system_id = %system.id(), name = %system.name(), "System published");
            let response: SystemResponse = system.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_system_error(e),
    }
}

/// GET /api/systems - List the caller's systems, newest first
pub async fn list_systems(
    State(handlers): State<SystemHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = ListSystemsQuery { user_id: user.id };

    match handlers.list_handler.handle(query).await {
        Ok(systems) => {
            let response: Vec<SystemResponse> = systems.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_system_error(error: SystemError) -> Response {
    error_response(error.code(), error.message())
}
