//! Use case handlers organized by domain area.

pub mod chat;
pub mod dashboard;
pub mod lead;
pub mod system;
