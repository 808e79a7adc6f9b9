//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Artifact generators (OpenAI, mock)
//! - `auth` - Token validators (JWT, mock)
//! - `http` - REST API (axum routers, middleware)
//! - `postgres` - PostgreSQL repositories
//! - `storage` - In-memory repositories for tests and local runs

pub mod ai;
pub mod auth;
pub mod http;
pub mod postgres;
pub mod storage;
