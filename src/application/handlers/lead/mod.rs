//! Lead use case handlers.

mod list_leads;

pub use list_leads::{ListLeadsHandler, ListLeadsQuery};
