//! System repository port.
//!
//! Defines the contract for persisting published systems and listing
//! them per owner.

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::system::System;
use async_trait::async_trait;

/// Repository port for System aggregate persistence.
#[async_trait]
pub trait SystemRepository: Send + Sync {
    /// Save a newly published system.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, system: &System) -> Result<(), DomainError>;

    /// Find all systems owned by a user.
    ///
    /// Returns systems ordered by created_at descending.
    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<System>, DomainError>;
}
