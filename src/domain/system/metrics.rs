//! Per-system engagement counters.

use serde::{Deserialize, Serialize};

/// Counters tracked per published system.
///
/// Zeroed at creation; incremented externally as funnel traffic arrives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemMetrics {
    pub views: u64,
    pub leads: u64,
    pub conversions: u64,
    pub conversion_rate: f64,
}

impl SystemMetrics {
    /// Returns the all-zero starting state for a new system.
    pub fn zeroed() -> Self {
        Self::default()
    }
}
