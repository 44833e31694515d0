//! Repository port for task comments.

use crate::schema::{CommentId, TaskId};
use crate::task::domain::TaskComment;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for comment repository operations.
pub type TaskCommentRepositoryResult<T> = Result<T, TaskCommentRepositoryError>;

/// Comment persistence contract.
#[async_trait]
pub trait TaskCommentRepository: Send + Sync {
    /// Stores a new comment.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCommentRepositoryError::DuplicateComment`] when the ID
    /// already exists.
    async fn store(&self, comment: &TaskComment) -> TaskCommentRepositoryResult<()>;

    /// Persists an edited comment.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCommentRepositoryError::NotFound`] when the comment does
    /// not exist.
    async fn update(&self, comment: &TaskComment) -> TaskCommentRepositoryResult<()>;

    /// Finds a comment by identifier.
    async fn find_by_id(&self, id: CommentId) -> TaskCommentRepositoryResult<Option<TaskComment>>;

    /// Returns the comments on a task, oldest first.
    async fn list_for_task(&self, task_id: TaskId) -> TaskCommentRepositoryResult<Vec<TaskComment>>;
}

/// Errors returned by comment repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskCommentRepositoryError {
    /// A comment with the same identifier already exists.
    #[error("duplicate comment identifier: {0}")]
    DuplicateComment(CommentId),

    /// The comment was not found.
    #[error("comment not found: {0}")]
    NotFound(CommentId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskCommentRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
