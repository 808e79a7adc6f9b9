//! Storage Adapters
//!
//! Implementations of the persistence ports.
//!
//! ## Available Adapters
//!
//! - **Postgres repositories** - Production persistence (see `adapters::postgres`)
//! - **In-memory repositories** - HashMap-backed stores (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{InMemoryChatSessionRepository, InMemorySystemRepository};
//!
//! let sessions = InMemoryChatSessionRepository::new();
//! let systems = InMemorySystemRepository::new();
//! ```

mod in_memory;

pub use in_memory::{
    InMemoryChatSessionRepository, InMemoryLeadRepository, InMemorySystemRepository,
};
