//! In-Memory Storage Adapters
//!
//! HashMap-backed implementations of the persistence ports.
//! Useful for testing and development without a database.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::chat::ChatSession;
use crate::domain::foundation::{ChatSessionId, DomainError, ErrorCode, LeadId, SystemId, UserId};
use crate::domain::lead::Lead;
use crate::domain::system::System;
use crate::ports::{ChatSessionRepository, LeadRepository, SystemRepository};

/// In-memory chat session store.
#[derive(Debug, Clone)]
pub struct InMemoryChatSessionRepository {
    sessions: Arc<RwLock<HashMap<ChatSessionId, ChatSession>>>,
}

impl InMemoryChatSessionRepository {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all stored sessions (useful for tests)
    pub async fn clear(&self) {
        self.sessions.write().await.clear();
    }

    /// Get the number of stored sessions
    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl Default for InMemoryChatSessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatSessionRepository for InMemoryChatSessionRepository {
    async fn save(&self, session: &ChatSession) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(*session.id(), session.clone());
        Ok(())
    }

    async fn update(&self, session: &ChatSession) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().await;
        if !sessions.contains_key(session.id()) {
            return Err(DomainError::new(
                ErrorCode::SessionNotFound,
                format!("Chat session not found: {}", session.id()),
            ));
        }
        sessions.insert(*session.id(), session.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ChatSessionId) -> Result<Option<ChatSession>, DomainError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(id).cloned())
    }
}

/// In-memory system store.
#[derive(Debug, Clone)]
pub struct InMemorySystemRepository {
    systems: Arc<RwLock<HashMap<SystemId, System>>>,
}

impl InMemorySystemRepository {
    pub fn new() -> Self {
        Self {
            systems: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all stored systems (useful for tests)
    pub async fn clear(&self) {
        self.systems.write().await.clear();
    }

    /// Get the number of stored systems
    pub async fn count(&self) -> usize {
        self.systems.read().await.len()
    }
}

impl Default for InMemorySystemRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SystemRepository for InMemorySystemRepository {
    async fn save(&self, system: &System) -> Result<(), DomainError> {
        let mut systems = self.systems.write().await;
        systems.insert(*system.id(), system.clone());
        Ok(())
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<System>, DomainError> {
        let systems = self.systems.read().await;
        let mut result: Vec<System> = systems
            .values()
            .filter(|system| system.is_owner(user_id))
            .cloned()
            .collect();
        result.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        Ok(result)
    }
}

/// In-memory lead store.
///
/// Leads carry no owner of their own; queries resolve ownership through
/// the system store, mirroring the join the SQL adapter performs.
#[derive(Debug, Clone)]
pub struct InMemoryLeadRepository {
    leads: Arc<RwLock<HashMap<LeadId, Lead>>>,
    systems: InMemorySystemRepository,
}

impl InMemoryLeadRepository {
    pub fn new(systems: InMemorySystemRepository) -> Self {
        Self {
            leads: Arc::new(RwLock::new(HashMap::new())),
            systems,
        }
    }

    /// Clear all stored leads (useful for tests)
    pub async fn clear(&self) {
        self.leads.write().await.clear();
    }

    /// Get the number of stored leads
    pub async fn count(&self) -> usize {
        self.leads.read().await.len()
    }
}

#[async_trait]
impl LeadRepository for InMemoryLeadRepository {
    async fn save(&self, lead: &Lead) -> Result<(), DomainError> {
        let mut leads = self.leads.write().await;
        leads.insert(*lead.id(), lead.clone());
        Ok(())
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<Lead>, DomainError> {
        let owned: HashSet<SystemId> = self
            .systems
            .find_by_user_id(user_id)
            .await?
            .iter()
            .map(|system| *system.id())
            .collect();

        let leads = self.leads.read().await;
        let mut result: Vec<Lead> = leads
            .values()
            .filter(|lead| owned.contains(lead.system_id()))
            .cloned()
            .collect();
        result.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        Ok(result)
    }
}
