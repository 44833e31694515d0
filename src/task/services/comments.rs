//! Service layer for task comments.

use crate::activity::{
    domain::{ActivityDraft, ActivityKind},
    ports::ActivityRepository,
    services::ActivityLog,
};
use crate::error::ErrorKind;
use crate::schema::{CommentId, SchemaLimits, TaskId, UserId, ValidationError};
use crate::task::{
    domain::TaskComment,
    ports::{TaskCommentRepository, TaskCommentRepositoryError, TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for comment operations.
#[derive(Debug, Error)]
pub enum TaskCommentError {
    /// Content validation or authorship check failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The commented task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
    /// The comment does not exist.
    #[error("comment not found: {0}")]
    CommentNotFound(CommentId),
    /// Task lookup failed.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),
    /// Comment persistence failed.
    #[error(transparent)]
    Comments(#[from] TaskCommentRepositoryError),
}

impl TaskCommentError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::TaskNotFound(_)
            | Self::CommentNotFound(_)
            | Self::Tasks(TaskRepositoryError::NotFound(_))
            | Self::Comments(TaskCommentRepositoryError::NotFound(_)) => ErrorKind::NotFound,
            Self::Tasks(_) | Self::Comments(_) => ErrorKind::Internal,
        }
    }
}

/// Result type for comment operations.
pub type TaskCommentResult<T> = Result<T, TaskCommentError>;

/// Comment orchestration service.
#[derive(Clone)]
pub struct TaskCommentService<R, M, A, C>
where
    R: TaskRepository,
    M: TaskCommentRepository,
    A: ActivityRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<R>,
    comments: Arc<M>,
    activity: ActivityLog<A, C>,
    clock: Arc<C>,
    limits: SchemaLimits,
}

impl<R, M, A, C> TaskCommentService<R, M, A, C>
where
    R: TaskRepository,
    M: TaskCommentRepository,
    A: ActivityRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new comment service with default schema limits.
    #[must_use]
    pub fn new(tasks: Arc<R>, comments: Arc<M>, activity: ActivityLog<A, C>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            comments,
            activity,
            clock,
            limits: SchemaLimits::default(),
        }
    }

    /// Replaces the schema limits used to validate content.
    #[must_use]
    pub fn with_limits(mut self, limits: SchemaLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Adds a comment to an existing task and records `comment_added`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCommentError::TaskNotFound`] for an unknown task,
    /// [`TaskCommentError::Validation`] for invalid content, or an internal
    /// error when persistence fails.
    pub async fn add_comment(
        &self,
        task_id: TaskId,
        author: UserId,
        content: &str,
    ) -> TaskCommentResult<TaskComment> {
        if self.tasks.find_by_id(task_id).await?.is_none() {
            return Err(TaskCommentError::TaskNotFound(task_id));
        }
        let comment = TaskComment::new(task_id, author, content, &self.limits, &*self.clock)?;
        self.comments.store(&comment).await?;
        self.activity
            .record_committed(
                ActivityDraft::new(
                    ActivityKind::builtin(ActivityKind::COMMENT_ADDED),
                    author,
                    "commented on a task",
                )
                .with_target(task_id)
                .with_metadata("commentId", comment.id().to_string()),
            )
            .await;
        tracing::info!(%task_id, comment_id = %comment.id(), %author, "comment added");
        Ok(comment)
    }

    /// Replaces a comment's content on behalf of its author.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCommentError::CommentNotFound`] for an unknown comment,
    /// [`TaskCommentError::Validation`] when `editor` is not the author or
    /// the content is invalid, or an internal error when persistence fails.
    pub async fn edit_comment(
        &self,
        comment_id: CommentId,
        editor: UserId,
        content: &str,
    ) -> TaskCommentResult<TaskComment> {
        let mut comment = self
            .comments
            .find_by_id(comment_id)
            .await?
            .ok_or(TaskCommentError::CommentNotFound(comment_id))?;
        comment.edit(editor, content, &self.limits, &*self.clock)?;
        self.comments.update(&comment).await?;
        self.activity
            .record_committed(
                ActivityDraft::new(
                    ActivityKind::builtin(ActivityKind::COMMENT_EDITED),
                    editor,
                    "edited a comment",
                )
                .with_target(comment.task_id())
                .with_metadata("commentId", comment_id.to_string()),
            )
            .await;
        tracing::info!(%comment_id, %editor, "comment edited");
        Ok(comment)
    }

    /// Returns the comments on a task, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCommentError::Comments`] when the lookup fails.
    pub async fn list_comments(&self, task_id: TaskId) -> TaskCommentResult<Vec<TaskComment>> {
        Ok(self.comments.list_for_task(task_id).await?)
    }
}
