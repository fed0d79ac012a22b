//! Domain model for oversight statistics.

mod stats;

pub use stats::DashboardStats;
