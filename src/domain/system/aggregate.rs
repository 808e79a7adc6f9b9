//! System aggregate entity.
//!
//! A System is the published, storefront-facing record created from a
//! completed chat session. The engine creates it once; lead capture and
//! metric updates happen outside this module.

use crate::domain::foundation::{
    DomainError, ErrorCode, SystemId, SystemStatus, Timestamp, UserId,
};
use serde_json::Value;

use super::artifact::GeneratedSystem;
use super::metrics::SystemMetrics;

/// Published sales system owned by a user.
///
/// # Invariants
///
/// - `name` is non-empty
/// - `url` is unique per system (slug plus creation millis)
/// - `config` holds the generator output merged with the original profile
#[derive(Debug, Clone, PartialEq)]
pub struct System {
    id: SystemId,
    user_id: UserId,
    template_id: Option<String>,
    name: String,
    url: String,
    config: Value,
    status: SystemStatus,
    metrics: SystemMetrics,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl System {
    /// Creates a new active system from a generated artifact.
    ///
    /// `original_data` is the profile the artifact was generated from; it
    /// is embedded into `config` under the `originalData` key.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the artifact name is empty
    pub fn from_artifact(
        user_id: UserId,
        artifact: &GeneratedSystem,
        original_data: Value,
    ) -> Result<Self, DomainError> {
        let name = artifact.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation(
                "name",
                "System name cannot be empty",
            ));
        }

        let created_at = Timestamp::now();
        let url = Self::build_url(name, &created_at);

        let mut config = serde_json::to_value(artifact).map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to serialize artifact: {}", e),
            )
        })?;
        if let Some(map) = config.as_object_mut() {
            map.insert("originalData".to_string(), original_data);
        }

        Ok(Self {
            id: SystemId::new(),
            user_id,
            template_id: None,
            name: name.to_string(),
            url,
            config,
            status: SystemStatus::Active,
            metrics: SystemMetrics::zeroed(),
            created_at,
            updated_at: created_at,
        })
    }

    /// Reconstitute a system from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: SystemId,
        user_id: UserId,
        template_id: Option<String>,
        name: String,
        url: String,
        config: Value,
        status: SystemStatus,
        metrics: SystemMetrics,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            template_id,
            name,
            url,
            config,
            status,
            metrics,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the system ID.
    pub fn id(&self) -> &SystemId {
        &self.id
    }

    /// Returns the owner's user ID.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the template this system was built from, if any.
    pub fn template_id(&self) -> Option<&str> {
        self.template_id.as_deref()
    }

    /// Returns the system name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the public url slug.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the full configuration (artifact plus original profile).
    pub fn config(&self) -> &Value {
        &self.config
    }

    /// Returns the current status.
    pub fn status(&self) -> SystemStatus {
        self.status
    }

    /// Returns the engagement counters.
    pub fn metrics(&self) -> &SystemMetrics {
        &self.metrics
    }

    /// Returns when the system was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the system was last updated.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Checks if the given user owns this system.
    pub fn is_owner(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Builds the public url: lowercased name with whitespace runs
    /// collapsed to hyphens, suffixed with the creation time in millis.
    fn build_url(name: &str, created_at: &Timestamp) -> String {
        let slug = name
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-");
        format!("{}-{}", slug, created_at.as_unix_millis())
    }
}
