//! Lead repository port.
//!
//! Leads belong to systems; user-facing queries join through system
//! ownership so a user only ever sees leads captured by their own
//! systems.

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::lead::Lead;
use async_trait::async_trait;

/// Repository port for Lead persistence.
#[async_trait]
pub trait LeadRepository: Send + Sync {
    /// Save a captured lead.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, lead: &Lead) -> Result<(), DomainError>;

    /// Find all leads captured by a user's systems.
    ///
    /// Returns leads ordered by created_at descending.
    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<Lead>, DomainError>;
}
