//! PostgreSQL implementation of LeadRepository.
//!
//! Persists Lead aggregates to PostgreSQL. Leads carry no owner column;
//! user-facing queries join through the owning system.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, LeadId, LeadStatus, SystemId, Timestamp, UserId};
use crate::domain::lead::Lead;
use crate::ports::LeadRepository;

/// PostgreSQL implementation of LeadRepository.
#[derive(Clone)]
pub struct PostgresLeadRepository {
    pool: PgPool,
}

impl PostgresLeadRepository {
    /// Creates a new PostgresLeadRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LeadRepository for PostgresLeadRepository {
    async fn save(&self, lead: &Lead) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO leads (
                id, system_id, data, status, converted, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(lead.id().as_uuid())
        .bind(lead.system_id().as_uuid())
        .bind(lead.data())
        .bind(lead_status_to_str(lead.status()))
        .bind(lead.is_converted())
        .bind(lead.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert lead: {}", e),
            )
        })?;

        Ok(())
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<Lead>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT l.id, l.system_id, l.data, l.status, l.converted, l.created_at
            FROM leads l
            INNER JOIN systems s ON l.system_id = s.id
            WHERE s.user_id = $1
            ORDER BY l.created_at DESC
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch leads by user: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_lead).collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn lead_status_to_str(status: LeadStatus) -> &'static str {
    match status {
        LeadStatus::New => "new",
        LeadStatus::Contacted => "contacted",
        LeadStatus::Converted => "converted",
    }
}

fn str_to_lead_status(s: &str) -> Result<LeadStatus, DomainError> {
    match s {
        "new" => Ok(LeadStatus::New),
        "contacted" => Ok(LeadStatus::Contacted),
        "converted" => Ok(LeadStatus::Converted),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid lead status: {}", s),
        )),
    }
}

fn row_to_lead(row: sqlx::postgres::PgRow) -> Result<Lead, DomainError> {
    let id: uuid::Uuid = row.try_get("id").map_err(|e| {
        DomainError::new(ErrorCode::DatabaseError, format!("Failed to get id: {}", e))
    })?;

    let system_id: uuid::Uuid = row.try_get("system_id").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get system_id: {}", e),
        )
    })?;

    let data: serde_json::Value = row.try_get("data").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get data: {}", e),
        )
    })?;

    let status_str: String = row.try_get("status").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get status: {}", e),
        )
    })?;
    let status = str_to_lead_status(&status_str)?;

    let converted: bool = row.try_get("converted").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get converted: {}", e),
        )
    })?;

    let created_at: chrono::DateTime<chrono::Utc> = row.try_get("created_at").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get created_at: {}", e),
        )
    })?;

    Ok(Lead::reconstitute(
        LeadId::from_uuid(id),
        SystemId::from_uuid(system_id),
        data,
        status,
        converted,
        Timestamp::from_datetime(created_at),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lead_status_conversion_roundtrips() {
        for status in [LeadStatus::New, LeadStatus::Contacted, LeadStatus::Converted] {
            assert_eq!(str_to_lead_status(lead_status_to_str(status)).unwrap(), status);
        }
    }

    #[test]
    fn str_to_lead_status_rejects_invalid() {
        assert!(str_to_lead_status("qualified").is_err());
    }
}
