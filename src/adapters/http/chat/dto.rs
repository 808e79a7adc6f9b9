//! HTTP DTOs for chat endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::domain::chat::{ChatSession, Message, SystemData, SystemPreview, TurnOutcome};
use crate::domain::foundation::SessionStatus;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body of a message turn.
///
/// `message` is optional so a missing field produces the domain's
/// "Message is required" rejection instead of a deserialization error.
#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageRequest {
    #[serde(default)]
    pub message: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Full session record for API responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSessionResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub messages: Vec<Message>,
    pub current_step: u8,
    pub system_data: SystemData,
    pub status: SessionStatus,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ChatSession> for ChatSessionResponse {
    fn from(session: ChatSession) -> Self {
        Self {
            id: session.id().to_string(),
            user_id: session.user_id().map(|u| u.to_string()),
            messages: session.messages().to_vec(),
            current_step: session.current_step(),
            system_data: session.system_data().clone(),
            status: session.status(),
            created_at: session.created_at().as_datetime().to_rfc3339(),
            updated_at: session.updated_at().as_datetime().to_rfc3339(),
        }
    }
}

/// Result of one processed turn.
///
/// `nextStep` is omitted once the wizard is complete and the preview is
/// present only on the completing turn.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnResponse {
    pub response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_step: Option<u8>,
    pub is_complete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_preview: Option<SystemPreview>,
}

impl From<TurnOutcome> for TurnResponse {
    fn from(outcome: TurnOutcome) -> Self {
        Self {
            response: outcome.response,
            next_step: outcome.next_step,
            is_complete: outcome.is_complete,
            system_preview: outcome.system_preview,
        }
    }
}
