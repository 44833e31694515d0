//! Task aggregate root and its status/progress state machine.

use super::{NewTask, Progress, TaskChanges, TaskDomainError, TaskPatch, TaskPriority, TaskStatus};
use crate::schema::{SchemaLimits, SuggestionId, TaskId, UserId, ValidationError};
use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

/// Where a task came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TaskOrigin {
    /// Created directly by a user.
    Manual,
    /// Materialized from an accepted AI suggestion.
    Suggestion {
        /// The originating suggestion.
        suggestion_id: SuggestionId,
    },
}

impl TaskOrigin {
    /// Returns the originating suggestion, if any.
    #[must_use]
    pub const fn suggestion_id(self) -> Option<SuggestionId> {
        match self {
            Self::Manual => None,
            Self::Suggestion { suggestion_id } => Some(suggestion_id),
        }
    }
}

/// Task aggregate root.
///
/// Invariants held by every constructor and mutator:
///
/// - `assigned_to` is never empty
/// - `status == Completed` implies `progress == 100`
/// - progress never changes while the task is cancelled
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    description: Option<String>,
    status: TaskStatus,
    priority: TaskPriority,
    assigned_to: BTreeSet<UserId>,
    created_by: UserId,
    due_date: Option<DateTime<Utc>>,
    progress: Progress,
    estimated_hours: Option<f64>,
    actual_hours: Option<f64>,
    tags: BTreeSet<String>,
    attachments: Vec<String>,
    origin: TaskOrigin,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a task from a validated payload.
    ///
    /// The status defaults to `todo`; progress starts at 0, or 100 when the
    /// payload asks for an already-completed task.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the payload is rejected by `limits`.
    pub fn create(
        input: NewTask,
        origin: TaskOrigin,
        limits: &SchemaLimits,
        clock: &impl Clock,
    ) -> Result<Self, ValidationError> {
        input.validate(limits)?;
        let timestamp = clock.utc();
        let status = input.status.unwrap_or(TaskStatus::Todo);
        let progress = if status == TaskStatus::Completed {
            Progress::COMPLETE
        } else {
            Progress::NONE
        };

        Ok(Self {
            id: TaskId::new(),
            title: input.title.trim().to_owned(),
            description: input.description,
            status,
            priority: input.priority,
            assigned_to: input.assigned_to.into_iter().collect(),
            created_by: input.created_by,
            due_date: input.due_date,
            progress,
            estimated_hours: input.estimated_hours,
            actual_hours: input.actual_hours,
            tags: normalize_tags(input.tags),
            attachments: input.attachments,
            origin,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the assignees.
    #[must_use]
    pub const fn assigned_to(&self) -> &BTreeSet<UserId> {
        &self.assigned_to
    }

    /// Returns `true` when `user` is among the assignees.
    #[must_use]
    pub fn is_assigned_to(&self, user: UserId) -> bool {
        self.assigned_to.contains(&user)
    }

    /// Returns the creator.
    #[must_use]
    pub const fn created_by(&self) -> UserId {
        self.created_by
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the completion percentage.
    #[must_use]
    pub const fn progress(&self) -> Progress {
        self.progress
    }

    /// Returns the estimated effort in hours.
    #[must_use]
    pub const fn estimated_hours(&self) -> Option<f64> {
        self.estimated_hours
    }

    /// Returns the effort already spent in hours.
    #[must_use]
    pub const fn actual_hours(&self) -> Option<f64> {
        self.actual_hours
    }

    /// Returns the tags.
    #[must_use]
    pub const fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// Returns the attachment references in insertion order.
    #[must_use]
    pub fn attachments(&self) -> &[String] {
        &self.attachments
    }

    /// Returns where the task came from.
    #[must_use]
    pub const fn origin(&self) -> TaskOrigin {
        self.origin
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies a validated patch, enforcing the status state machine.
    ///
    /// Entering `completed` forces progress to 100 whatever the patch asks
    /// for. Entering or staying in `cancelled` keeps progress frozen. The
    /// update timestamp always moves, even for a patch that changes nothing.
    ///
    /// On error the task is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTransition`] when the requested
    /// status is not reachable from the current one.
    pub fn apply_patch(
        &mut self,
        patch: TaskPatch,
        clock: &impl Clock,
    ) -> Result<TaskChanges, TaskDomainError> {
        let target_status = patch.status.unwrap_or(self.status);
        if target_status != self.status && !self.status.can_transition_to(target_status) {
            return Err(TaskDomainError::InvalidTransition {
                task_id: self.id,
                from: self.status,
                to: target_status,
            });
        }

        let mut changes = TaskChanges::default();
        if let Some(title) = patch.title {
            let trimmed = title.trim().to_owned();
            changes.record("title", &self.title, &trimmed);
            self.title = trimmed;
        }
        if let Some(description) = patch.description {
            changes.record("description", &self.description, &description);
            self.description = description;
        }
        if let Some(priority) = patch.priority {
            changes.record("priority", &self.priority, &priority);
            self.priority = priority;
        }
        if let Some(assignees) = patch.assigned_to {
            let next: BTreeSet<UserId> = assignees.into_iter().collect();
            changes.record_assignees(&self.assigned_to, &next);
            self.assigned_to = next;
        }
        if let Some(due_date) = patch.due_date {
            changes.record("dueDate", &self.due_date, &due_date);
            self.due_date = due_date;
        }
        if let Some(hours) = patch.estimated_hours {
            changes.record("estimatedHours", &self.estimated_hours, &hours);
            self.estimated_hours = hours;
        }
        if let Some(hours) = patch.actual_hours {
            changes.record("actualHours", &self.actual_hours, &hours);
            self.actual_hours = hours;
        }
        if let Some(tags) = patch.tags {
            let next = normalize_tags(tags);
            changes.record("tags", &self.tags, &next);
            self.tags = next;
        }
        if let Some(attachments) = patch.attachments {
            changes.record("attachments", &self.attachments, &attachments);
            self.attachments = attachments;
        }

        let next_progress = match target_status {
            TaskStatus::Completed => Progress::COMPLETE,
            TaskStatus::Cancelled => self.progress,
            TaskStatus::Todo | TaskStatus::InProgress => patch
                .progress
                .and_then(|value| Progress::new(value).ok())
                .unwrap_or(self.progress),
        };
        changes.record("status", &self.status, &target_status);
        changes.record("progress", &self.progress, &next_progress);
        self.status = target_status;
        self.progress = next_progress;

        self.touch(clock);
        Ok(changes)
    }

    /// Advances `updated_at`, guaranteeing it differs from the prior value.
    fn touch(&mut self, clock: &impl Clock) {
        let now = clock.utc();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + TimeDelta::microseconds(1)
        };
    }
}

fn normalize_tags(tags: Vec<String>) -> BTreeSet<String> {
    tags.into_iter().map(|tag| tag.trim().to_owned()).collect()
}

/// Renders a field value for change summaries.
pub(crate) fn to_value(value: &impl Serialize) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}
