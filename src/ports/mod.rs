//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `ChatSessionRepository` - Chat session aggregate persistence
//! - `SystemRepository` - Published system persistence
//! - `LeadRepository` - Captured lead persistence (user-scoped reads)
//!
//! ## Capability Ports
//!
//! - `ArtifactGenerator` - Model-backed system generation; callers fall
//!   back to the deterministic artifact on any error
//! - `TokenValidator` - Bearer token validation for authenticated routes

mod artifact_generator;
mod chat_session_repository;
mod lead_repository;
mod system_repository;
mod token_validator;

pub use artifact_generator::{ArtifactGenerator, GenerationError};
pub use chat_session_repository::ChatSessionRepository;
pub use lead_repository::LeadRepository;
pub use system_repository::SystemRepository;
pub use token_validator::TokenValidator;
