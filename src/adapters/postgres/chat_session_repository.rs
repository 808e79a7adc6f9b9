//! PostgreSQL implementation of ChatSessionRepository.
//!
//! Persists ChatSession aggregates to PostgreSQL. The transcript and
//! the collected answers are stored as JSONB.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::chat::{ChatSession, Message, SystemData};
use crate::domain::foundation::{
    ChatSessionId, DomainError, ErrorCode, SessionStatus, Timestamp, UserId,
};
use crate::ports::ChatSessionRepository;

/// PostgreSQL implementation of ChatSessionRepository.
#[derive(Clone)]
pub struct PostgresChatSessionRepository {
    pool: PgPool,
}

impl PostgresChatSessionRepository {
    /// Creates a new PostgresChatSessionRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChatSessionRepository for PostgresChatSessionRepository {
    async fn save(&self, session: &ChatSession) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO chat_sessions (
                id, user_id, messages, current_step, system_data, status, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(session.id().as_uuid())
        .bind(session.user_id().map(|u| u.as_str()))
        .bind(messages_to_json(session.messages())?)
        .bind(session.current_step() as i16)
        .bind(system_data_to_json(session.system_data())?)
        .bind(session_status_to_str(session.status()))
        .bind(session.created_at().as_datetime())
        .bind(session.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert chat session: {}", e),
            )
        })?;

        Ok(())
    }

    async fn update(&self, session: &ChatSession) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE chat_sessions SET
                messages = $2,
                current_step = $3,
                system_data = $4,
                status = $5,
                updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(session.id().as_uuid())
        .bind(messages_to_json(session.messages())?)
        .bind(session.current_step() as i16)
        .bind(system_data_to_json(session.system_data())?)
        .bind(session_status_to_str(session.status()))
        .bind(session.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to update chat session: {}", e),
            )
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::SessionNotFound,
                format!("Chat session not found: {}", session.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &ChatSessionId) -> Result<Option<ChatSession>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, messages, current_step, system_data, status,
                   created_at, updated_at
            FROM chat_sessions
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch chat session: {}", e),
            )
        })?;

        match row {
            Some(row) => Ok(Some(row_to_chat_session(row)?)),
            None => Ok(None),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn session_status_to_str(status: SessionStatus) -> &'static str {
    match status {
        SessionStatus::Active => "active",
        SessionStatus::Archived => "archived",
    }
}

fn str_to_session_status(s: &str) -> Result<SessionStatus, DomainError> {
    match s {
        "active" => Ok(SessionStatus::Active),
        "archived" => Ok(SessionStatus::Archived),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid session status: {}", s),
        )),
    }
}

fn messages_to_json(messages: &[Message]) -> Result<serde_json::Value, DomainError> {
    serde_json::to_value(messages).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to serialize messages: {}", e),
        )
    })
}

fn system_data_to_json(data: &SystemData) -> Result<serde_json::Value, DomainError> {
    serde_json::to_value(data).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to serialize system data: {}", e),
        )
    })
}

fn row_to_chat_session(row: sqlx::postgres::PgRow) -> Result<ChatSession, DomainError> {
    let id: uuid::Uuid = row.try_get("id").map_err(|e| {
        DomainError::new(ErrorCode::DatabaseError, format!("Failed to get id: {}", e))
    })?;

    let user_id: Option<String> = row.try_get("user_id").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get user_id: {}", e),
        )
    })?;
    let user_id = user_id
        .map(|raw| {
            UserId::new(raw).map_err(|e| {
                DomainError::new(ErrorCode::DatabaseError, format!("Invalid user_id: {}", e))
            })
        })
        .transpose()?;

    let messages_json: serde_json::Value = row.try_get("messages").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get messages: {}", e),
        )
    })?;
    let messages: Vec<Message> = serde_json::from_value(messages_json).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to deserialize messages: {}", e),
        )
    })?;

    let current_step: i16 = row.try_get("current_step").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get current_step: {}", e),
        )
    })?;

    let system_data_json: serde_json::Value = row.try_get("system_data").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get system_data: {}", e),
        )
    })?;
    let system_data: SystemData = serde_json::from_value(system_data_json).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to deserialize system data: {}", e),
        )
    })?;

    let status_str: String = row.try_get("status").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get status: {}", e),
        )
    })?;
    let status = str_to_session_status(&status_str)?;

    let created_at: chrono::DateTime<chrono::Utc> = row.try_get("created_at").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get created_at: {}", e),
        )
    })?;

    let updated_at: chrono::DateTime<chrono::Utc> = row.try_get("updated_at").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get updated_at: {}", e),
        )
    })?;

    Ok(ChatSession::reconstitute(
        ChatSessionId::from_uuid(id),
        user_id,
        messages,
        current_step as u8,
        system_data,
        status,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_status_conversion_roundtrips() {
        let active = SessionStatus::Active;
        assert_eq!(
            str_to_session_status(session_status_to_str(active)).unwrap(),
            active
        );

        let archived = SessionStatus::Archived;
        assert_eq!(
            str_to_session_status(session_status_to_str(archived)).unwrap(),
            archived
        );
    }

    #[test]
    fn str_to_session_status_rejects_invalid() {
        assert!(str_to_session_status("invalid").is_err());
    }

    #[test]
    fn messages_serialize_with_camel_case_keys() {
        let messages = vec![Message::assistant_with_options(
            "Escolha uma opção",
            vec!["Sim".to_string(), "Não".to_string()],
        )];

        let json = messages_to_json(&messages).unwrap();
        assert_eq!(json[0]["role"], "assistant");
        assert!(json[0].get("options").is_some());
    }
}
