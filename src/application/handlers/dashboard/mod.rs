//! Dashboard use case handlers.

mod get_metrics;

pub use get_metrics::{GetDashboardMetricsHandler, GetDashboardMetricsQuery};
