//! Lead domain module.
//!
//! Leads captured by published systems. Capture itself happens on the
//! public landing pages; this module models the stored lead and its
//! follow-up status.

mod aggregate;

pub use aggregate::Lead;
