//! System domain module.
//!
//! Published sales systems: the generated artifact shape, the system
//! aggregate created from a completed questionnaire, and the engagement
//! metrics tracked per system.

mod aggregate;
mod artifact;
mod errors;
mod metrics;

pub use aggregate::System;
pub use artifact::{
    GeneratedSystem, PreviewCard, PreviewColors, DEFAULT_PRIMARY_COLOR, DEFAULT_SECONDARY_COLOR,
};
pub use errors::SystemError;
pub use metrics::SystemMetrics;
