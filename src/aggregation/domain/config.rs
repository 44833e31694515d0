//! Aggregation windows.

use serde::{Deserialize, Serialize};

/// Time windows applied by the derived views.
///
/// ```
/// use campusdesk::aggregation::domain::AggregationConfig;
///
/// let config = AggregationConfig::default();
/// assert_eq!(config.due_soon_window_hours, 72);
/// assert_eq!(config.recent_join_days, 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AggregationConfig {
    /// Forward window, in hours, within which an open task counts as due
    /// soon.
    pub due_soon_window_hours: u32,
    /// Trailing window, in days, within which a user counts as a recent
    /// join.
    pub recent_join_days: u32,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            due_soon_window_hours: 72,
            recent_join_days: 30,
        }
    }
}
