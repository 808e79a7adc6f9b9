//! HTTP routes for chat endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_chat_session, get_question_flow, send_message, start_chat, ChatHandlers};

/// Creates the chat router with all endpoints.
pub fn chat_routes(handlers: ChatHandlers) -> Router {
    Router::new()
        .route("/start", post(start_chat))
        .route("/flow", get(get_question_flow))
        .route("/:session_id", get(get_chat_session))
        .route("/:session_id/message", post(send_message))
        .with_state(handlers)
}
