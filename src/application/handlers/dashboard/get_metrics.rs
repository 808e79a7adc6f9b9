//! GetDashboardMetricsHandler - Query handler for the dashboard summary.

use std::sync::Arc;

use crate::domain::dashboard::DashboardMetrics;
use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::ports::{LeadRepository, SystemRepository};

/// Query for a user's dashboard metrics.
#[derive(Debug, Clone)]
pub struct GetDashboardMetricsQuery {
    pub user_id: UserId,
}

/// Handler that assembles dashboard metrics from systems and leads.
pub struct GetDashboardMetricsHandler {
    systems: Arc<dyn SystemRepository>,
    leads: Arc<dyn LeadRepository>,
}

impl GetDashboardMetricsHandler {
    pub fn new(systems: Arc<dyn SystemRepository>, leads: Arc<dyn LeadRepository>) -> Self {
        Self { systems, leads }
    }

    pub async fn handle(
        &self,
        query: GetDashboardMetricsQuery,
    ) -> Result<DashboardMetrics, DomainError> {
        let systems = self.systems.find_by_user_id(&query.user_id).await?;
        let leads = self.leads.find_by_user_id(&query.user_id).await?;
        Ok(DashboardMetrics::compute(&systems, &leads, &Timestamp::now()))
    }
}
