//! Application layer - use case handlers.
//!
//! Each handler wires domain logic to ports. Handlers own no business
//! rules themselves; they load aggregates, invoke domain operations and
//! persist the result.

pub mod handlers;

pub use handlers::chat::{
    GetChatSessionHandler, GetChatSessionQuery, ProcessMessageCommand, ProcessMessageHandler,
    ProcessMessageResult, StartChatCommand, StartChatHandler,
};
pub use handlers::dashboard::{GetDashboardMetricsHandler, GetDashboardMetricsQuery};
pub use handlers::lead::{ListLeadsHandler, ListLeadsQuery};
pub use handlers::system::{
    ListSystemsHandler, ListSystemsQuery, PublishSystemCommand, PublishSystemHandler,
};
