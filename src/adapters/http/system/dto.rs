//! HTTP DTOs for system endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::SystemStatus;
use crate::domain::system::{System, SystemMetrics};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to publish a system from a completed chat session.
///
/// `sessionId` is optional at the serde level so a missing field maps to
/// the API's 400 instead of a deserialization error.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFromChatRequest {
    #[serde(default)]
    pub session_id: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Published system record for API responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemResponse {
    pub id: String,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    pub name: String,
    pub url: String,
    pub config: serde_json::Value,
    pub status: SystemStatus,
    pub metrics: SystemMetrics,
    pub created_at: String,
    pub updated_at: String,
}

impl From<System> for SystemResponse {
    fn from(system: System) -> Self {
        Self {
            id: system.id().to_string(),
            user_id: system.user_id().to_string(),
            template_id: system.template_id().map(str::to_string),
            name: system.name().to_string(),
            url: system.url().to_string(),
            config: system.config().clone(),
            status: system.status(),
            metrics: *system.metrics(),
            created_at: system.created_at().as_datetime().to_rfc3339(),
            updated_at: system.updated_at().as_datetime().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use crate::domain::system::GeneratedSystem;

    #[test]
    fn create_from_chat_request_deserializes() {
        let json = r#"{"sessionId": "550e8400-e29b-41d4-a716-446655440000"}"#;
        let req: CreateFromChatRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            req.session_id.as_deref(),
            Some("550e8400-e29b-41d4-a716-446655440000")
        );
    }

    #[test]
    fn create_from_chat_request_tolerates_missing_field() {
        let req: CreateFromChatRequest = serde_json::from_str("{}").unwrap();
        assert!(req.session_id.is_none());
    }

    #[test]
    fn system_response_serializes_camel_case() {
        let artifact = GeneratedSystem::fallback(Some("empresários"), None);
        let system = System::from_artifact(
            UserId::new("user-123").unwrap(),
            &artifact,
            serde_json::json!({"originalData": {}}),
        )
        .unwrap();

        let response: SystemResponse = system.into();
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["userId"], "user-123");
        assert_eq!(json["name"], "Sistema Personalizado");
        assert_eq!(json["status"], "active");
        assert_eq!(json["metrics"]["conversionRate"], 0.0);
        assert!(json.get("user_id").is_none());
    }
}
