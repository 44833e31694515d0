//! Repository port for task persistence and lookup.

use crate::schema::{TaskId, UserId};
use crate::task::domain::{Task, TaskStatus};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Selection applied when listing tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaskFilter {
    /// Every task.
    #[default]
    All,
    /// Tasks assigned to the user.
    AssignedTo(UserId),
    /// Tasks created by the user.
    CreatedBy(UserId),
    /// Tasks currently in the status.
    Status(TaskStatus),
}

impl TaskFilter {
    /// Returns `true` when `task` is selected by this filter.
    #[must_use]
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::AssignedTo(user) => task.is_assigned_to(user),
            Self::CreatedBy(user) => task.created_by() == user,
            Self::Status(status) => task.status() == status,
        }
    }
}

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID already
    /// exists.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Replaces an existing task if its stored `updated_at` still equals
    /// `expected_updated_at`.
    ///
    /// The comparison and the write happen as one atomic step.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist
    /// or [`TaskRepositoryError::Conflict`] carrying the stored task when the
    /// timestamps differ.
    async fn update(
        &self,
        task: &Task,
        expected_updated_at: DateTime<Utc>,
    ) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns the tasks selected by `filter`, most recently updated first.
    async fn list(&self, filter: TaskFilter) -> TaskRepositoryResult<Vec<Task>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The stored task changed since the caller last read it.
    #[error("task {} was modified concurrently", .current.id())]
    Conflict {
        /// The task as currently stored.
        current: Box<Task>,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
