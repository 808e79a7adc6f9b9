//! PostgreSQL persistence adapters.
//!
//! Implements the repository ports against PostgreSQL using sqlx.
//! Aggregates are stored as flat rows; nested values (messages, profile
//! data, metrics) live in jsonb columns and round-trip through serde.
//!
//! ## Available Adapters
//!
//! - `PostgresChatSessionRepository`: chat session persistence
//! - `PostgresSystemRepository`: published system persistence
//! - `PostgresLeadRepository`: captured lead persistence

mod chat_session_repository;
mod lead_repository;
mod system_repository;

pub use chat_session_repository::PostgresChatSessionRepository;
pub use lead_repository::PostgresLeadRepository;
pub use system_repository::PostgresSystemRepository;
