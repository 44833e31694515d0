//! Per-day progress series.

use super::ProgressPeriod;
use crate::task::domain::{Task, TaskStatus};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Task counts attributed to one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressPoint {
    /// UTC calendar day.
    pub date: NaiveDate,
    /// Completed tasks last touched that day.
    pub completed: u64,
    /// In-progress tasks last touched that day.
    pub in_progress: u64,
    /// To-do tasks last touched that day.
    pub todo: u64,
}

impl ProgressPoint {
    const fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            completed: 0,
            in_progress: 0,
            todo: 0,
        }
    }
}

/// Builds one point per day of `period`, oldest first, ending on `today`.
///
/// Each task lands in the bucket for the UTC date of its `updated_at`,
/// counted under its current status. Earlier days do not see it, and
/// cancelled tasks are left out entirely.
#[must_use]
pub fn compute_progress_series(
    tasks: &[Task],
    period: ProgressPeriod,
    today: NaiveDate,
) -> Vec<ProgressPoint> {
    let span = u64::from(period.days().saturating_sub(1));
    let Some(first_day) = today.checked_sub_days(Days::new(span)) else {
        return Vec::new();
    };

    let mut buckets: BTreeMap<NaiveDate, ProgressPoint> = first_day
        .iter_days()
        .take_while(|day| *day <= today)
        .map(|day| (day, ProgressPoint::empty(day)))
        .collect();

    for task in tasks {
        let day = task.updated_at().date_naive();
        let Some(point) = buckets.get_mut(&day) else {
            continue;
        };
        match task.status() {
            TaskStatus::Todo => point.todo += 1,
            TaskStatus::InProgress => point.in_progress += 1,
            TaskStatus::Completed => point.completed += 1,
            TaskStatus::Cancelled => {}
        }
    }

    buckets.into_values().collect()
}
