//! Lead aggregate entity.
//!
//! A lead is a visitor captured by a published system's landing page.
//! The capture payload is free-form; each template decides which fields
//! it collects.

use crate::domain::foundation::{LeadId, LeadStatus, SystemId, Timestamp};
use serde_json::Value;

/// Captured lead belonging to a published system.
#[derive(Debug, Clone, PartialEq)]
pub struct Lead {
    id: LeadId,
    system_id: SystemId,
    data: Value,
    status: LeadStatus,
    converted: bool,
    created_at: Timestamp,
}

impl Lead {
    /// Captures a new lead for a system.
    pub fn capture(system_id: SystemId, data: Value) -> Self {
        Self {
            id: LeadId::new(),
            system_id,
            data,
            status: LeadStatus::New,
            converted: false,
            created_at: Timestamp::now(),
        }
    }

    /// Reconstitute a lead from persistence (no validation).
    pub fn reconstitute(
        id: LeadId,
        system_id: SystemId,
        data: Value,
        status: LeadStatus,
        converted: bool,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            system_id,
            data,
            status,
            converted,
            created_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the lead ID.
    pub fn id(&self) -> &LeadId {
        &self.id
    }

    /// Returns the system that captured this lead.
    pub fn system_id(&self) -> &SystemId {
        &self.system_id
    }

    /// Returns the captured form payload.
    pub fn data(&self) -> &Value {
        &self.data
    }

    /// Returns the follow-up status.
    pub fn status(&self) -> LeadStatus {
        self.status
    }

    /// Returns true if the lead converted into a sale.
    pub fn is_converted(&self) -> bool {
        self.converted
    }

    /// Returns when the lead was captured.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Marks the lead as converted.
    pub fn mark_converted(&mut self) {
        self.status = LeadStatus::Converted;
        self.converted = true;
    }
}
