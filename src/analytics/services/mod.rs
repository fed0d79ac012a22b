//! Application services for dashboard statistics.

mod dashboard;

pub use dashboard::{AnalyticsError, AnalyticsResult, AnalyticsService};
