//! System use case handlers.

mod list_systems;
mod publish_system;

pub use list_systems::{ListSystemsHandler, ListSystemsQuery};
pub use publish_system::{PublishSystemCommand, PublishSystemHandler};
