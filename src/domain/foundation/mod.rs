//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the Salomão domain.

mod auth;
mod errors;
mod ids;
mod status;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ChatSessionId, LeadId, SystemId, UserId};
pub use status::{LeadStatus, SessionStatus, SystemStatus};
pub use timestamp::Timestamp;
