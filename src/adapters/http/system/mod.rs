//! HTTP adapter for system endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateFromChatRequest, SystemResponse};
pub use handlers::SystemHandlers;
pub use routes::system_routes;
