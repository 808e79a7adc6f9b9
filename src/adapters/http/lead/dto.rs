//! HTTP DTOs for lead endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::LeadStatus;
use crate::domain::lead::Lead;

/// Query parameters for the recent leads endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RecentLeadsQuery {
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Captured lead record for API responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadResponse {
    pub id: String,
    pub system_id: String,
    pub data: serde_json::Value,
    pub status: LeadStatus,
    pub converted: bool,
    pub created_at: String,
}

impl From<Lead> for LeadResponse {
    fn from(lead: Lead) -> Self {
        Self {
            id: lead.id().to_string(),
            system_id: lead.system_id().to_string(),
            data: lead.data().clone(),
            status: lead.status(),
            converted: lead.is_converted(),
            created_at: lead.created_at().as_datetime().to_rfc3339(),
        }
    }
}
