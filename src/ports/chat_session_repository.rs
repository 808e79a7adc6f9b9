//! Chat session repository port (write side).
//!
//! Defines the contract for persisting and retrieving ChatSession
//! aggregates. Implementations handle the actual database operations.

use crate::domain::chat::ChatSession;
use crate::domain::foundation::{ChatSessionId, DomainError};
use async_trait::async_trait;

/// Repository port for ChatSession aggregate persistence.
///
/// Sessions may be anonymous, so lookups are by session ID only; the
/// ID itself is the access token for a conversation.
#[async_trait]
pub trait ChatSessionRepository: Send + Sync {
    /// Save a new session.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, session: &ChatSession) -> Result<(), DomainError>;

    /// Update an existing session.
    ///
    /// Persists the transcript, the current step and the collected
    /// answers in one write.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the session doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, session: &ChatSession) -> Result<(), DomainError>;

    /// Find a session by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &ChatSessionId)
        -> Result<Option<ChatSession>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn chat_session_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ChatSessionRepository) {}
    }
}
