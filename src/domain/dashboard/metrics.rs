use serde::Serialize;

use crate::domain::foundation::Timestamp;
use crate::domain::lead::Lead;
use crate::domain::system::System;

/// Estimated revenue per converted lead, in BRL.
const REVENUE_PER_CONVERSION: f64 = 850.0;

/// Rating shown on the dashboard until per-system ratings exist.
const AVERAGE_RATING: f64 = 4.8;

/// The dashboard headline numbers - computed from a user's systems and leads
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    /// Leads captured today (UTC calendar day)
    pub leads_today: u64,

    /// All leads across the user's systems
    pub total_leads: u64,

    /// Converted leads as a rounded percentage of all leads
    pub conversion_rate: u64,

    /// Projected revenue in thousands of BRL
    pub projected_revenue: u64,

    /// Systems currently live
    pub active_systems: u64,

    pub average_rating: f64,
}

impl DashboardMetrics {
    /// Computes the headline numbers for one user.
    ///
    /// `today` anchors the "leads today" window; callers pass the
    /// current time so the computation stays deterministic in tests.
    pub fn compute(systems: &[System], leads: &[Lead], today: &Timestamp) -> Self {
        let total_leads = leads.len() as u64;
        let leads_today = leads
            .iter()
            .filter(|lead| lead.created_at().is_same_day(today))
            .count() as u64;
        let conversions = leads.iter().filter(|lead| lead.is_converted()).count();

        let conversion_rate = if total_leads > 0 {
            ((conversions as f64 / total_leads as f64) * 100.0).round() as u64
        } else {
            0
        };
        let projected_revenue =
            ((conversions as f64 * REVENUE_PER_CONVERSION) / 1000.0).round() as u64;
        let active_systems = systems
            .iter()
            .filter(|system| system.status().is_active())
            .count() as u64;

        Self {
            leads_today,
            total_leads,
            conversion_rate,
            projected_revenue,
            active_systems,
            average_rating: AVERAGE_RATING,
        }
    }
}

#[cfg(test)]
#[path = "metrics_test.rs"]
mod metrics_test;
