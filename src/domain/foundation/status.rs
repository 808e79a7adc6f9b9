//! Lifecycle status enums shared across the domain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a chat session.
///
/// Sessions stay `Active` even after the questionnaire completes so the
/// final step can be replayed; `Archived` sessions reject further turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    #[default]
    Active,
    Archived,
}

impl SessionStatus {
    /// Returns true if the session can still accept turns.
    pub fn is_mutable(&self) -> bool {
        matches!(self, SessionStatus::Active)
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionStatus::Active => "Active",
            SessionStatus::Archived => "Archived",
        };
        write!(f, "{}", s)
    }
}

/// Lifecycle status of a published sales system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SystemStatus {
    #[default]
    Active,
    Paused,
}

impl SystemStatus {
    /// Returns true if the system is live and counted on the dashboard.
    pub fn is_active(&self) -> bool {
        matches!(self, SystemStatus::Active)
    }
}

impl fmt::Display for SystemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SystemStatus::Active => "Active",
            SystemStatus::Paused => "Paused",
        };
        write!(f, "{}", s)
    }
}

/// Qualification status of a captured lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    Converted,
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LeadStatus::New => "New",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::Converted => "Converted",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_status_default_is_active() {
        assert_eq!(SessionStatus::default(), SessionStatus::Active);
    }

    #[test]
    fn session_status_is_mutable_only_while_active() {
        assert!(SessionStatus::Active.is_mutable());
        assert!(!SessionStatus::Archived.is_mutable());
    }

    #[test]
    fn session_status_serializes_to_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&SessionStatus::Active).unwrap(),
            "\"active\""
        );
        assert_eq!(
            serde_json::to_string(&SessionStatus::Archived).unwrap(),
            "\"archived\""
        );
    }

    #[test]
    fn session_status_deserializes_from_snake_case_json() {
        let status: SessionStatus = serde_json::from_str("\"active\"").unwrap();
        assert_eq!(status, SessionStatus::Active);

        let status: SessionStatus = serde_json::from_str("\"archived\"").unwrap();
        assert_eq!(status, SessionStatus::Archived);
    }

    #[test]
    fn system_status_default_is_active() {
        assert_eq!(SystemStatus::default(), SystemStatus::Active);
    }

    #[test]
    fn system_status_is_active_works() {
        assert!(SystemStatus::Active.is_active());
        assert!(!SystemStatus::Paused.is_active());
    }

    #[test]
    fn system_status_serializes_to_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&SystemStatus::Active).unwrap(),
            "\"active\""
        );
        assert_eq!(
            serde_json::to_string(&SystemStatus::Paused).unwrap(),
            "\"paused\""
        );
    }

    #[test]
    fn lead_status_default_is_new() {
        assert_eq!(LeadStatus::default(), LeadStatus::New);
    }

    #[test]
    fn lead_status_serializes_to_snake_case_json() {
        assert_eq!(serde_json::to_string(&LeadStatus::New).unwrap(), "\"new\"");
        assert_eq!(
            serde_json::to_string(&LeadStatus::Contacted).unwrap(),
            "\"contacted\""
        );
        assert_eq!(
            serde_json::to_string(&LeadStatus::Converted).unwrap(),
            "\"converted\""
        );
    }

    #[test]
    fn statuses_display_correctly() {
        assert_eq!(format!("{}", SessionStatus::Active), "Active");
        assert_eq!(format!("{}", SystemStatus::Paused), "Paused");
        assert_eq!(format!("{}", LeadStatus::Converted), "Converted");
    }
}
