//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod chat;
pub mod dashboard;
pub mod error;
pub mod lead;
pub mod middleware;
pub mod monitor;
pub mod system;

// Re-export key types for convenience
pub use chat::{chat_routes, ChatHandlers};
pub use dashboard::{dashboard_routes, DashboardHandlers};
pub use error::ErrorResponse;
pub use lead::{lead_routes, LeadHandlers};
pub use monitor::{monitor_routes, MonitorState};
pub use system::{system_routes, SystemHandlers};
