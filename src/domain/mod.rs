//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `chat` - Scripted questionnaire flow and chat session aggregate
//! - `system` - Published sales systems and the generated artifact shape
//! - `lead` - Captured leads and their follow-up status
//! - `dashboard` - Read models computed for the dashboard

pub mod chat;
pub mod dashboard;
pub mod foundation;
pub mod lead;
pub mod system;
