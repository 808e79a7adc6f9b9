//! HTTP adapter for lead endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{LeadResponse, RecentLeadsQuery};
pub use handlers::LeadHandlers;
pub use routes::lead_routes;
