//! HTTP adapter for chat endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ChatSessionResponse, SendMessageRequest, TurnResponse};
pub use handlers::ChatHandlers;
pub use routes::chat_routes;
