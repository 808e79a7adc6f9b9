//! PostgreSQL implementation of SystemRepository.
//!
//! Persists System aggregates to PostgreSQL. The generated configuration
//! and the engagement counters are stored as JSONB.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, SystemId, SystemStatus, Timestamp, UserId};
use crate::domain::system::{System, SystemMetrics};
use crate::ports::SystemRepository;

/// PostgreSQL implementation of SystemRepository.
#[derive(Clone)]
pub struct PostgresSystemRepository {
    pool: PgPool,
}

impl PostgresSystemRepository {
    /// Creates a new PostgresSystemRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SystemRepository for PostgresSystemRepository {
    async fn save(&self, system: &System) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO systems (
                id, user_id, template_id, name, url, config, status, metrics,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(system.id().as_uuid())
        .bind(system.user_id().as_str())
        .bind(system.template_id())
        .bind(system.name())
        .bind(system.url())
        .bind(system.config())
        .bind(system_status_to_str(system.status()))
        .bind(metrics_to_json(system.metrics())?)
        .bind(system.created_at().as_datetime())
        .bind(system.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert system: {}", e),
            )
        })?;

        Ok(())
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<System>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, template_id, name, url, config, status, metrics,
                   created_at, updated_at
            FROM systems
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch systems by user: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_system).collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn system_status_to_str(status: SystemStatus) -> &'static str {
    match status {
        SystemStatus::Active => "active",
        SystemStatus::Paused => "paused",
    }
}

fn str_to_system_status(s: &str) -> Result<SystemStatus, DomainError> {
    match s {
        "active" => Ok(SystemStatus::Active),
        "paused" => Ok(SystemStatus::Paused),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid system status: {}", s),
        )),
    }
}

fn metrics_to_json(metrics: &SystemMetrics) -> Result<serde_json::Value, DomainError> {
    serde_json::to_value(metrics).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to serialize metrics: {}", e),
        )
    })
}

fn row_to_system(row: sqlx::postgres::PgRow) -> Result<System, DomainError> {
    let id: uuid::Uuid = row.try_get("id").map_err(|e| {
        DomainError::new(ErrorCode::DatabaseError, format!("Failed to get id: {}", e))
    })?;

    let user_id: String = row.try_get("user_id").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get user_id: {}", e),
        )
    })?;

    let template_id: Option<String> = row.try_get("template_id").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get template_id: {}", e),
        )
    })?;

    let name: String = row.try_get("name").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get name: {}", e),
        )
    })?;

    let url: String = row.try_get("url").map_err(|e| {
        DomainError::new(ErrorCode::DatabaseError, format!("Failed to get url: {}", e))
    })?;

    let config: serde_json::Value = row.try_get("config").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get config: {}", e),
        )
    })?;

    let status_str: String = row.try_get("status").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get status: {}", e),
        )
    })?;
    let status = str_to_system_status(&status_str)?;

    let metrics_json: serde_json::Value = row.try_get("metrics").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get metrics: {}", e),
        )
    })?;
    let metrics: SystemMetrics = serde_json::from_value(metrics_json).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to deserialize metrics: {}", e),
        )
    })?;

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

    Ok(System::reconstitute(
        SystemId::from_uuid(id),
        UserId::new(user_id).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid user_id: {}", e))
        })?,
        template_id,
        name,
        url,
        config,
        status,
        metrics,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_status_conversion_roundtrips() {
        let active = SystemStatus::Active;
        assert_eq!(
            str_to_system_status(system_status_to_str(active)).unwrap(),
            active
        );

        let paused = SystemStatus::Paused;
        assert_eq!(
            str_to_system_status(system_status_to_str(paused)).unwrap(),
            paused
        );
    }

    #[test]
    fn str_to_system_status_rejects_invalid() {
        assert!(str_to_system_status("deleted").is_err());
    }

    #[test]
    fn metrics_round_trip_through_json() {
        let metrics = SystemMetrics {
            views: 10,
            leads: 4,
            conversions: 1,
            conversion_rate: 25.0,
        };

        let json = metrics_to_json(&metrics).unwrap();
        let back: SystemMetrics = serde_json::from_value(json).unwrap();
        assert_eq!(back, metrics);
    }
}
