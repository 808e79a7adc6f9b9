//! HTTP handlers for chat endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use crate::adapters::http::error::error_response;
use crate::adapters::http::middleware::OptionalAuth;
use crate::application::handlers::chat::{
    GetChatSessionHandler, GetChatSessionQuery, ProcessMessageCommand, ProcessMessageHandler,
    StartChatCommand, StartChatHandler,
};
use crate::domain::chat::{ChatError, QuestionStep, QUESTION_FLOW};
use crate::domain::foundation::{ChatSessionId, ErrorCode};

use super::dto::{ChatSessionResponse, SendMessageRequest, TurnResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ChatHandlers {
    start_handler: Arc<StartChatHandler>,
    process_handler: Arc<ProcessMessageHandler>,
    get_handler: Arc<GetChatSessionHandler>,
}

impl ChatHandlers {
    pub fn new(
        start_handler: Arc<StartChatHandler>,
        process_handler: Arc<ProcessMessageHandler>,
        get_handler: Arc<GetChatSessionHandler>,
    ) -> Self {
        Self {
            start_handler,
            process_handler,
            get_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/chat/start - Start a new wizard session
///
/// Anonymous visitors are allowed; an authenticated caller becomes the
/// session owner.
pub async fn start_chat(
    State(handlers): State<ChatHandlers>,
    OptionalAuth(user): OptionalAuth,
) -> Response {
    let cmd = StartChatCommand {
        user_id: user.map(|u| u.id),
    };

    match handlers.start_handler.handle(cmd).await {
        Ok(session) => {
            info!(session_id = %session.id(), "Chat session started");
            let response: ChatSessionResponse = session.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_chat_error(e),
    }
}

/// POST /api/chat/:session_id/message - Process one questionnaire turn
pub async fn send_message(
    State(handlers): State<ChatHandlers>,
    Path(session_id): Path<String>,
    Json(req): Json<SendMessageRequest>,
) -> Response {
    let session_id = match session_id.parse::<ChatSessionId>() {
        Ok(id) => id,
        Err(_) => return error_response(ErrorCode::InvalidFormat, "Invalid session ID"),
    };

    let cmd = ProcessMessageCommand {
        session_id,
        message: req.message.unwrap_or_default(),
    };

    match handlers.process_handler.handle(cmd).await {
        Ok(result) => {
            let response: TurnResponse = result.outcome.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_chat_error(e),
    }
}

/// GET /api/chat/:session_id - Get the session record
pub async fn get_chat_session(
    State(handlers): State<ChatHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match session_id.parse::<ChatSessionId>() {
        Ok(id) => id,
        Err(_) => return error_response(ErrorCode::InvalidFormat, "Invalid session ID"),
    };

    match handlers.get_handler.handle(GetChatSessionQuery { session_id }).await {
        Ok(session) => {
            let response: ChatSessionResponse = session.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_chat_error(e),
    }
}

/// GET /api/chat/flow - The static question table
pub async fn get_question_flow() -> Json<&'static [QuestionStep]> {
    Json(QUESTION_FLOW.as_slice())
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_chat_error(error: ChatError) -> Response {
    error_response(error.code(), error.message())
}
