//! HTTP adapter for monitor endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{HealthResponse, ServiceInfoResponse};
pub use handlers::MonitorState;
pub use routes::monitor_routes;
