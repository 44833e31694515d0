//! Derived view types and the pure functions that compute them.

mod config;
mod dashboard;
mod period;
mod series;
mod team;

pub use config::AggregationConfig;
pub use dashboard::{DashboardStats, compute_dashboard_stats};
pub use period::ProgressPeriod;
pub use series::{ProgressPoint, compute_progress_series};
pub use team::{TeamStats, compute_team_stats};
