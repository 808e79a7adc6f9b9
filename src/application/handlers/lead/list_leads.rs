//! ListLeadsHandler - Query handler for leads captured by a user's systems.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::lead::Lead;
use crate::ports::LeadRepository;

/// Query to list leads across all of a user's systems.
///
/// `limit` caps the result after the repository returns the newest-first
/// list, so `Some(10)` yields the ten most recent leads.
#[derive(Debug, Clone)]
pub struct ListLeadsQuery {
    pub user_id: UserId,
    pub limit: Option<usize>,
}

/// Handler for listing leads.
pub struct ListLeadsHandler {
    leads: Arc<dyn LeadRepository>,
}

impl ListLeadsHandler {
    pub fn new(leads: Arc<dyn LeadRepository>) -> Self {
        Self { leads }
    }

    pub async fn handle(&self, query: ListLeadsQuery) -> Result<Vec<Lead>, DomainError> {
        let mut leads = self.leads.find_by_user_id(&query.user_id).await?;
        if let Some(limit) = query.limit {
            leads.truncate(limit);
        }
        Ok(leads)
    }
}
