//! StartChatHandler - Command handler for starting a new chat session.

use std::sync::Arc;

use crate::domain::chat::{ChatError, ChatSession};
use crate::domain::foundation::UserId;
use crate::ports::ChatSessionRepository;

/// Command to start a new chat session.
#[derive(Debug, Clone)]
pub struct StartChatCommand {
    /// Owner of the session, `None` for anonymous visitors.
    pub user_id: Option<UserId>,
}

/// Handler for starting chat sessions.
pub struct StartChatHandler {
    sessions: Arc<dyn ChatSessionRepository>,
}

impl StartChatHandler {
    pub fn new(sessions: Arc<dyn ChatSessionRepository>) -> Self {
        Self { sessions }
    }

    pub async fn handle(&self, cmd: StartChatCommand) -> Result<ChatSession, ChatError> {
        let session = ChatSession::start(cmd.user_id);
        self.sessions.save(&session).await?;
        Ok(session)
    }
}
