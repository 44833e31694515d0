//! Comments left by users on a task.

use crate::schema::{CommentId, FieldIssues, SchemaLimits, TaskId, UserId, ValidationError};
use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A comment attached to a task.
///
/// The task reference is a back-pointer; comments do not own their task.
/// Only the content may change after creation, and only by the author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskComment {
    id: CommentId,
    task_id: TaskId,
    user_id: UserId,
    content: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TaskComment {
    /// Creates a comment after validating its content.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] on the `content` field when it is blank or
    /// too long.
    pub fn new(
        task_id: TaskId,
        user_id: UserId,
        content: &str,
        limits: &SchemaLimits,
        clock: &impl Clock,
    ) -> Result<Self, ValidationError> {
        validate_content(content, limits)?;
        let timestamp = clock.utc();
        Ok(Self {
            id: CommentId::new(),
            task_id,
            user_id,
            content: content.trim().to_owned(),
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Returns the comment identifier.
    #[must_use]
    pub const fn id(&self) -> CommentId {
        self.id
    }

    /// Returns the task the comment belongs to.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the author.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the comment text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest edit timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the content on behalf of `editor`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when `editor` is not the author (field
    /// `userId`) or the content is invalid (field `content`).
    pub fn edit(
        &mut self,
        editor: UserId,
        content: &str,
        limits: &SchemaLimits,
        clock: &impl Clock,
    ) -> Result<(), ValidationError> {
        if editor != self.user_id {
            return Err(ValidationError::single(
                "userId",
                "only the comment author may edit its content",
            ));
        }
        validate_content(content, limits)?;
        self.content = content.trim().to_owned();
        let now = clock.utc();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + TimeDelta::microseconds(1)
        };
        Ok(())
    }
}

fn validate_content(content: &str, limits: &SchemaLimits) -> Result<(), ValidationError> {
    let mut issues = FieldIssues::new();
    issues.require_text("content", content, limits.max_comment_length);
    issues.finish()
}
