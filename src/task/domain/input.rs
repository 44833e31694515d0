//! Inbound task payloads and their boundary validation.

use super::{TaskPriority, TaskStatus};
use crate::schema::{FieldIssues, SchemaLimits, UserId, ValidationError};
use chrono::{DateTime, Utc};

/// Payload for creating a task.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub(crate) title: String,
    pub(crate) description: Option<String>,
    pub(crate) status: Option<TaskStatus>,
    pub(crate) priority: TaskPriority,
    pub(crate) assigned_to: Vec<UserId>,
    pub(crate) created_by: UserId,
    pub(crate) due_date: Option<DateTime<Utc>>,
    pub(crate) estimated_hours: Option<f64>,
    pub(crate) actual_hours: Option<f64>,
    pub(crate) tags: Vec<String>,
    pub(crate) attachments: Vec<String>,
}

impl NewTask {
    /// Creates a payload with the required fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        created_by: UserId,
        assigned_to: impl IntoIterator<Item = UserId>,
    ) -> Self {
        Self {
            title: title.into(),
            description: None,
            status: None,
            priority: TaskPriority::default(),
            assigned_to: assigned_to.into_iter().collect(),
            created_by,
            due_date: None,
            estimated_hours: None,
            actual_hours: None,
            tags: Vec::new(),
            attachments: Vec::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Overrides the initial status (defaults to `todo`).
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the estimated effort in hours.
    #[must_use]
    pub const fn with_estimated_hours(mut self, hours: f64) -> Self {
        self.estimated_hours = Some(hours);
        self
    }

    /// Sets the effort already spent in hours.
    #[must_use]
    pub const fn with_actual_hours(mut self, hours: f64) -> Self {
        self.actual_hours = Some(hours);
        self
    }

    /// Sets the tags.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    /// Sets the attachment references.
    #[must_use]
    pub fn with_attachments(mut self, attachments: impl IntoIterator<Item = String>) -> Self {
        self.attachments = attachments.into_iter().collect();
        self
    }

    /// Returns the requesting user.
    #[must_use]
    pub const fn created_by(&self) -> UserId {
        self.created_by
    }

    /// Validates the payload against `limits`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] listing every rejected field.
    pub fn validate(&self, limits: &SchemaLimits) -> Result<(), ValidationError> {
        let mut issues = FieldIssues::new();
        issues.require_text("title", &self.title, limits.max_title_length);
        issues.check_optional_text(
            "description",
            self.description.as_deref(),
            limits.max_description_length,
        );
        check_assignees(&mut issues, &self.assigned_to);
        issues.check_non_negative("estimatedHours", self.estimated_hours);
        issues.check_non_negative("actualHours", self.actual_hours);
        check_tags(&mut issues, &self.tags, limits);
        check_attachments(&mut issues, &self.attachments, limits);
        issues.finish()
    }
}

/// Partial update for an existing task.
///
/// `None` leaves a field untouched. Clearable optional fields use a nested
/// option where `Some(None)` clears the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    /// New title.
    pub title: Option<String>,
    /// New description, or `Some(None)` to clear it.
    pub description: Option<Option<String>>,
    /// Requested status.
    pub status: Option<TaskStatus>,
    /// New priority.
    pub priority: Option<TaskPriority>,
    /// Replacement assignee set.
    pub assigned_to: Option<Vec<UserId>>,
    /// New due date, or `Some(None)` to clear it.
    pub due_date: Option<Option<DateTime<Utc>>>,
    /// Requested progress percentage.
    pub progress: Option<u8>,
    /// New estimate, or `Some(None)` to clear it.
    pub estimated_hours: Option<Option<f64>>,
    /// New actual effort, or `Some(None)` to clear it.
    pub actual_hours: Option<Option<f64>>,
    /// Replacement tag set.
    pub tags: Option<Vec<String>>,
    /// Replacement attachment list.
    pub attachments: Option<Vec<String>>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a status change.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Requests a progress change.
    #[must_use]
    pub const fn with_progress(mut self, progress: u8) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Replaces the assignee set.
    #[must_use]
    pub fn with_assignees(mut self, assignees: impl IntoIterator<Item = UserId>) -> Self {
        self.assigned_to = Some(assignees.into_iter().collect());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(Some(due_date));
        self
    }

    /// Clears the due date.
    #[must_use]
    pub const fn clear_due_date(mut self) -> Self {
        self.due_date = Some(None);
        self
    }

    /// Replaces the tags.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags = Some(tags.into_iter().collect());
        self
    }

    /// Sets the actual effort.
    #[must_use]
    pub const fn with_actual_hours(mut self, hours: f64) -> Self {
        self.actual_hours = Some(Some(hours));
        self
    }

    /// Validates the supplied fields against `limits`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] listing every rejected field.
    pub fn validate(&self, limits: &SchemaLimits) -> Result<(), ValidationError> {
        let mut issues = FieldIssues::new();
        if let Some(title) = &self.title {
            issues.require_text("title", title, limits.max_title_length);
        }
        if let Some(description) = &self.description {
            issues.check_optional_text(
                "description",
                description.as_deref(),
                limits.max_description_length,
            );
        }
        if let Some(assignees) = &self.assigned_to {
            check_assignees(&mut issues, assignees);
        }
        if let Some(progress) = self.progress
            && progress > 100
        {
            issues.push("progress", format!("must be between 0 and 100, got {progress}"));
        }
        if let Some(hours) = self.estimated_hours {
            issues.check_non_negative("estimatedHours", hours);
        }
        if let Some(hours) = self.actual_hours {
            issues.check_non_negative("actualHours", hours);
        }
        if let Some(tags) = &self.tags {
            check_tags(&mut issues, tags, limits);
        }
        if let Some(attachments) = &self.attachments {
            check_attachments(&mut issues, attachments, limits);
        }
        issues.finish()
    }
}

fn check_assignees(issues: &mut FieldIssues, assignees: &[UserId]) {
    if assignees.is_empty() {
        issues.push("assignedTo", "must contain at least one user");
    }
}

fn check_tags(issues: &mut FieldIssues, tags: &[String], limits: &SchemaLimits) {
    if tags.len() > limits.max_tags {
        issues.push(
            "tags",
            format!("must contain at most {} tags, got {}", limits.max_tags, tags.len()),
        );
    }
    for (index, tag) in tags.iter().enumerate() {
        issues.require_text(&format!("tags[{index}]"), tag, limits.max_tag_length);
    }
}

fn check_attachments(issues: &mut FieldIssues, attachments: &[String], limits: &SchemaLimits) {
    if attachments.len() > limits.max_attachments {
        issues.push(
            "attachments",
            format!(
                "must contain at most {} references, got {}",
                limits.max_attachments,
                attachments.len()
            ),
        );
    }
    for (index, reference) in attachments.iter().enumerate() {
        if reference.trim().is_empty() {
            issues.push(format!("attachments[{index}]"), "must not be empty");
        }
    }
}
