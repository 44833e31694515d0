//! Domain tests for task creation, patches, and change summaries.

use crate::clock::ManualClock;
use crate::schema::{SchemaLimits, UserId};
use crate::task::domain::{
    NewTask, Progress, Task, TaskOrigin, TaskPatch, TaskPriority, TaskStatus,
};
use chrono::{TimeDelta, TimeZone, Utc};
use mockable::Clock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> ManualClock {
    ManualClock::new(
        Utc.with_ymd_and_hms(2025, 2, 3, 10, 0, 0)
            .single()
            .expect("valid timestamp"),
    )
}

fn create(input: NewTask, clock: &ManualClock) -> Task {
    Task::create(input, TaskOrigin::Manual, &SchemaLimits::default(), clock)
        .expect("valid task")
}

#[rstest]
fn create_defaults_to_todo_with_zero_progress(clock: ManualClock) {
    let task = create(NewTask::new("Order textbooks", UserId::new(), [UserId::new()]), &clock);

    assert_eq!(task.status(), TaskStatus::Todo);
    assert_eq!(task.progress(), Progress::NONE);
    assert_eq!(task.priority(), TaskPriority::Medium);
    assert_eq!(task.created_at(), task.updated_at());
    assert_eq!(task.origin(), TaskOrigin::Manual);
}

#[rstest]
fn create_honours_initial_completed_status(clock: ManualClock) {
    let task = create(
        NewTask::new("Already done", UserId::new(), [UserId::new()])
            .with_status(TaskStatus::Completed),
        &clock,
    );
    assert_eq!(task.progress(), Progress::COMPLETE);
}

#[rstest]
fn create_rejects_empty_assignees_and_collects_other_issues(clock: ManualClock) {
    let err = Task::create(
        NewTask::new("", UserId::new(), Vec::<UserId>::new())
            .with_estimated_hours(-2.0)
            .with_tags(vec!["x".repeat(51)]),
        TaskOrigin::Manual,
        &SchemaLimits::default(),
        &clock,
    )
    .expect_err("payload should be rejected");

    assert!(err.has_issue_for("title"));
    assert!(err.has_issue_for("assignedTo"));
    assert!(err.has_issue_for("estimatedHours"));
    assert!(err.has_issue_for("tags[0]"));
}

#[rstest]
#[case(SchemaLimits::default(), 200, true)]
#[case(SchemaLimits::default(), 201, false)]
#[case(SchemaLimits::strict(), 101, false)]
fn title_ceiling_follows_limits(
    clock: ManualClock,
    #[case] limits: SchemaLimits,
    #[case] length: usize,
    #[case] ok: bool,
) {
    let result = Task::create(
        NewTask::new("t".repeat(length), UserId::new(), [UserId::new()]),
        TaskOrigin::Manual,
        &limits,
        &clock,
    );
    assert_eq!(result.is_ok(), ok);
}

#[rstest]
fn duplicate_assignees_and_tags_collapse(clock: ManualClock) {
    let teacher = UserId::new();
    let task = create(
        NewTask::new("Plan trip", UserId::new(), [teacher, teacher])
            .with_tags(vec!["trips".to_owned(), " trips ".to_owned()]),
        &clock,
    );

    assert_eq!(task.assigned_to().len(), 1);
    assert_eq!(task.tags().len(), 1);
}

#[rstest]
fn patch_rejects_out_of_range_progress_and_empty_assignees() {
    let err = TaskPatch::new()
        .with_progress(101)
        .with_assignees(Vec::<UserId>::new())
        .validate(&SchemaLimits::default())
        .expect_err("patch should be rejected");

    assert!(err.has_issue_for("progress"));
    assert!(err.has_issue_for("assignedTo"));
}

#[rstest]
fn progress_rejects_values_above_one_hundred() {
    assert!(Progress::new(100).is_ok());
    assert!(Progress::new(101).is_err());
    assert!(serde_json::from_str::<Progress>("150").is_err());
}

#[rstest]
fn changes_summarise_fields_and_assignee_delta(clock: ManualClock) {
    let original = UserId::new();
    let added = UserId::new();
    let mut task = create(NewTask::new("Mark mocks", UserId::new(), [original]), &clock);

    let changes = task
        .apply_patch(
            TaskPatch::new()
                .with_assignees([added])
                .with_priority(TaskPriority::Urgent)
                .with_due_date(clock.utc() + TimeDelta::days(2)),
            &clock,
        )
        .expect("patch applies");

    assert!(changes.contains("priority"));
    assert!(changes.contains("dueDate"));
    assert!(changes.contains("assignedTo"));
    assert!(!changes.contains("status"));
    assert_eq!(changes.added_assignees(), &[added]);
    assert_eq!(changes.removed_assignees(), &[original]);
    let metadata = changes.to_metadata();
    assert_eq!(
        metadata.pointer("/priority/to"),
        Some(&serde_json::json!("urgent"))
    );
}

#[rstest]
fn updated_at_strictly_increases_on_a_frozen_clock(clock: ManualClock) {
    let mut task = create(NewTask::new("Audit", UserId::new(), [UserId::new()]), &clock);
    let before = task.updated_at();

    task.apply_patch(TaskPatch::new(), &clock).expect("empty patch applies");

    assert!(task.updated_at() > before);
    assert_eq!(task.created_at(), before);
}

#[rstest]
fn clear_due_date_removes_it(clock: ManualClock) {
    let mut task = create(
        NewTask::new("Book hall", UserId::new(), [UserId::new()])
            .with_due_date(clock.utc()),
        &clock,
    );

    task.apply_patch(TaskPatch::new().clear_due_date(), &clock)
        .expect("patch applies");

    assert_eq!(task.due_date(), None);
}

#[rstest]
#[case("low", TaskPriority::Low)]
#[case("medium", TaskPriority::Medium)]
#[case("high", TaskPriority::High)]
#[case("urgent", TaskPriority::Urgent)]
fn priority_parses_storage_names(#[case] raw: &str, #[case] expected: TaskPriority) {
    assert_eq!(TaskPriority::try_from(raw).expect("known priority"), expected);
}

#[rstest]
fn task_serializes_with_camel_case_fields(clock: ManualClock) {
    let task = create(
        NewTask::new("Serialize me", UserId::new(), [UserId::new()])
            .with_status(TaskStatus::InProgress),
        &clock,
    );

    let json = serde_json::to_value(&task).expect("serializable");

    assert_eq!(json.get("status"), Some(&serde_json::json!("in_progress")));
    assert!(json.get("assignedTo").is_some());
    assert!(json.get("updatedAt").is_some());
    let back: Task = serde_json::from_value(json).expect("deserializable");
    assert_eq!(back, task);
}
