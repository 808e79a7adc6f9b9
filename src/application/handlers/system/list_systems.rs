//! ListSystemsHandler - Query handler for a user's published systems.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::system::System;
use crate::ports::SystemRepository;

/// Query to list all systems owned by a user.
#[derive(Debug, Clone)]
pub struct ListSystemsQuery {
    pub user_id: UserId,
}

/// Handler for listing systems.
pub struct ListSystemsHandler {
    systems: Arc<dyn SystemRepository>,
}

impl ListSystemsHandler {
    pub fn new(systems: Arc<dyn SystemRepository>) -> Self {
        Self { systems }
    }

    pub async fn handle(&self, query: ListSystemsQuery) -> Result<Vec<System>, DomainError> {
        self.systems.find_by_user_id(&query.user_id).await
    }
}
