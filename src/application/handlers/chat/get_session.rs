//! GetChatSessionHandler - Query handler for retrieving a chat session.

use std::sync::Arc;

use crate::domain::chat::{ChatError, ChatSession};
use crate::domain::foundation::ChatSessionId;
use crate::ports::ChatSessionRepository;

/// Query to get a chat session by ID.
///
/// The session ID doubles as the access token for a conversation, so
/// there is no separate ownership check here.
#[derive(Debug, Clone)]
pub struct GetChatSessionQuery {
    pub session_id: ChatSessionId,
}

/// Handler for retrieving chat sessions.
pub struct GetChatSessionHandler {
    sessions: Arc<dyn ChatSessionRepository>,
}

impl GetChatSessionHandler {
    pub fn new(sessions: Arc<dyn ChatSessionRepository>) -> Self {
        Self { sessions }
    }

    pub async fn handle(&self, query: GetChatSessionQuery) -> Result<ChatSession, ChatError> {
        self.sessions
            .find_by_id(&query.session_id)
            .await?
            .ok_or_else(|| ChatError::not_found(query.session_id))
    }
}
