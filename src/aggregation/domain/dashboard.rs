//! Dashboard counters.

use super::AggregationConfig;
use crate::task::domain::{Task, TaskStatus};
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Headline task counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Every task, whatever its status.
    pub total_tasks: u64,
    /// Tasks in progress.
    pub in_progress: u64,
    /// Completed tasks.
    pub completed: u64,
    /// Open tasks due within the configured forward window.
    pub due_soon: u64,
}

impl DashboardStats {
    /// Returns `count` as a whole percentage of `total_tasks`, rounding
    /// halves up. An empty collection yields `0`.
    ///
    /// ```
    /// use campusdesk::aggregation::domain::DashboardStats;
    ///
    /// let stats = DashboardStats { total_tasks: 3, in_progress: 1, completed: 2, due_soon: 0 };
    /// assert_eq!(stats.percentage_of(1), 33);
    /// assert_eq!(stats.percentage_of(2), 67);
    /// assert_eq!(DashboardStats::default().percentage_of(0), 0);
    /// ```
    #[must_use]
    pub fn percentage_of(&self, count: u64) -> u64 {
        let numerator = count.saturating_mul(200).saturating_add(self.total_tasks);
        numerator
            .checked_div(self.total_tasks.saturating_mul(2))
            .unwrap_or(0)
    }

    /// Percentage of tasks in progress.
    #[must_use]
    pub fn in_progress_percentage(&self) -> u64 {
        self.percentage_of(self.in_progress)
    }

    /// Percentage of tasks completed.
    #[must_use]
    pub fn completed_percentage(&self) -> u64 {
        self.percentage_of(self.completed)
    }

    /// Percentage of tasks due soon.
    #[must_use]
    pub fn due_soon_percentage(&self) -> u64 {
        self.percentage_of(self.due_soon)
    }
}

/// Counts tasks in a single pass.
///
/// A task is due soon when it is neither completed nor cancelled and its
/// due date lies in `[now, now + window]`. Overdue tasks are not counted.
#[must_use]
pub fn compute_dashboard_stats(
    tasks: &[Task],
    now: DateTime<Utc>,
    config: &AggregationConfig,
) -> DashboardStats {
    let horizon = now + TimeDelta::hours(i64::from(config.due_soon_window_hours));
    tasks
        .iter()
        .fold(DashboardStats::default(), |mut stats, task| {
            stats.total_tasks += 1;
            match task.status() {
                TaskStatus::InProgress => stats.in_progress += 1,
                TaskStatus::Completed => stats.completed += 1,
                TaskStatus::Todo | TaskStatus::Cancelled => {}
            }
            let is_due_soon = !task.status().is_terminal()
                && task
                    .due_date()
                    .is_some_and(|due| due >= now && due <= horizon);
            if is_due_soon {
                stats.due_soon += 1;
            }
            stats
        })
}
