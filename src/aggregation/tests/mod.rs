//! Unit tests for derived views.


use crate::clock::ManualClock;
use crate::schema::{SchemaLimits, UserId};
use crate::task::domain::{NewTask, Task, TaskOrigin, TaskPatch, TaskStatus};
use chrono::{DateTime, TimeZone, Utc};

/// Noon on 2025-06-16 UTC.
fn noon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 16, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// Builds a task last touched at `touched` and walked into `status`.
fn task_at(touched: DateTime<Utc>, status: TaskStatus) -> Task {
    let clock = ManualClock::new(touched);
    let mut task = Task::create(
        NewTask::new("Prepare assembly", UserId::new(), [UserId::new()]),
        TaskOrigin::Manual,
        &SchemaLimits::default(),
        &clock,
    )
    .expect("valid task");
    let path: &[TaskStatus] = match status {
        TaskStatus::Todo => &[],
        TaskStatus::InProgress => &[TaskStatus::InProgress],
        TaskStatus::Completed => &[TaskStatus::InProgress, TaskStatus::Completed],
        TaskStatus::Cancelled => &[TaskStatus::Cancelled],
    };
    for step in path {
        task.apply_patch(TaskPatch::new().with_status(*step), &clock)
            .expect("legal transition");
    }
    task
}
