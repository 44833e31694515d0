//! Service layer for task creation, update, and retrieval.

use crate::activity::{
    domain::{ActivityDraft, ActivityKind},
    ports::ActivityRepository,
    services::ActivityLog,
};
use crate::error::ErrorKind;
use crate::notification::{NotificationDispatcher, NotificationEvent, Notifier};
use crate::schema::{SchemaLimits, TaskId, UserId, ValidationError};
use crate::task::{
    domain::{NewTask, Task, TaskDomainError, TaskOrigin, TaskPatch, TaskStatus},
    ports::{TaskFilter, TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for updating a task.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateTaskRequest {
    task_id: TaskId,
    actor: UserId,
    expected_updated_at: DateTime<Utc>,
    patch: TaskPatch,
}

impl UpdateTaskRequest {
    /// Creates an update request.
    ///
    /// `expected_updated_at` is the `updated_at` the caller last observed;
    /// the update is rejected with a conflict if the task has moved on.
    #[must_use]
    pub const fn new(
        task_id: TaskId,
        actor: UserId,
        expected_updated_at: DateTime<Utc>,
        patch: TaskPatch,
    ) -> Self {
        Self {
            task_id,
            actor,
            expected_updated_at,
            patch,
        }
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Input validation failed; nothing was applied.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The status state machine rejected the update.
    #[error("invalid status transition for task {}: {from} -> {to}", .current.id())]
    InvalidTransition {
        /// Current status.
        from: TaskStatus,
        /// Requested status.
        to: TaskStatus,
        /// The task as currently stored.
        current: Box<Task>,
    },

    /// The task changed since the caller last read it.
    #[error(
        "task {} was modified concurrently (expected updated_at {expected}, found {})",
        .current.id(),
        .current.updated_at()
    )]
    Conflict {
        /// The `updated_at` the caller supplied.
        expected: DateTime<Utc>,
        /// The task as currently stored.
        current: Box<Task>,
    },

    /// Repository operation failed; nothing was applied.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}

impl TaskLifecycleError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::InvalidTransition { .. } => ErrorKind::InvalidTransition,
            Self::Conflict { .. } => ErrorKind::Conflict,
            Self::Repository(_) => ErrorKind::Internal,
        }
    }

    fn conflict(expected: DateTime<Utc>, current: Task) -> Self {
        Self::Conflict {
            expected,
            current: Box::new(current),
        }
    }
}

impl From<TaskRepositoryError> for TaskLifecycleError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
pub struct TaskLifecycleService<R, A, N, C>
where
    R: TaskRepository,
    A: ActivityRepository,
    N: NotificationDispatcher,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    activity: ActivityLog<A, C>,
    notifier: Notifier<N>,
    clock: Arc<C>,
    limits: Arc<SchemaLimits>,
}

impl<R, A, N, C> Clone for TaskLifecycleService<R, A, N, C>
where
    R: TaskRepository,
    A: ActivityRepository,
    N: NotificationDispatcher,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            activity: self.activity.clone(),
            notifier: self.notifier.clone(),
            clock: Arc::clone(&self.clock),
            limits: Arc::clone(&self.limits),
        }
    }
}

impl<R, A, N, C> TaskLifecycleService<R, A, N, C>
where
    R: TaskRepository,
    A: ActivityRepository,
    N: NotificationDispatcher,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service with default schema limits.
    #[must_use]
    pub fn new(
        repository: Arc<R>,
        activity: ActivityLog<A, C>,
        notifier: Notifier<N>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            repository,
            activity,
            notifier,
            clock,
            limits: Arc::new(SchemaLimits::default()),
        }
    }

    /// Replaces the schema limits used to validate input.
    #[must_use]
    pub fn with_limits(mut self, limits: SchemaLimits) -> Self {
        self.limits = Arc::new(limits);
        self
    }

    /// Returns the schema limits in force.
    #[must_use]
    pub fn limits(&self) -> &SchemaLimits {
        &self.limits
    }

    /// Creates a task, records `task_created`, and notifies the assignees.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Validation`] when the payload is
    /// rejected, or an internal error when persistence fails.
    pub async fn create_task(&self, input: NewTask) -> TaskLifecycleResult<Task> {
        let task = self.prepare_task(input, TaskOrigin::Manual)?;
        self.commit_new_task(task).await
    }

    /// Validates a payload and builds the task without persisting it.
    pub(crate) fn prepare_task(
        &self,
        input: NewTask,
        origin: TaskOrigin,
    ) -> TaskLifecycleResult<Task> {
        Ok(Task::create(input, origin, &self.limits, &*self.clock)?)
    }

    /// Persists a prepared task and runs the creation side effects.
    ///
    /// Fails only when the store rejects the task, in which case nothing was
    /// committed.
    pub(crate) async fn commit_new_task(&self, task: Task) -> TaskLifecycleResult<Task> {
        self.repository.store(&task).await?;

        let mut draft = ActivityDraft::new(
            ActivityKind::builtin(ActivityKind::TASK_CREATED),
            task.created_by(),
            format!("created task \"{}\"", task.title()),
        )
        .with_target(task.id())
        .with_metadata("status", task.status().as_str())
        .with_metadata("priority", task.priority().as_str());
        if let Some(suggestion_id) = task.origin().suggestion_id() {
            draft = draft.with_metadata("suggestionId", suggestion_id.to_string());
        }
        self.activity.record_committed(draft).await;

        tracing::info!(
            task_id = %task.id(),
            created_by = %task.created_by(),
            status = %task.status(),
            "task created"
        );
        let recipients: Vec<UserId> = task.assigned_to().iter().copied().collect();
        self.notifier
            .announce(NotificationEvent::TaskAssigned, &task, &recipients);
        Ok(task)
    }

    /// Applies a partial update under the status state machine.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Validation`] for a malformed patch,
    /// [`TaskLifecycleError::NotFound`] for an unknown task,
    /// [`TaskLifecycleError::Conflict`] when the task changed since
    /// `expected_updated_at`, or [`TaskLifecycleError::InvalidTransition`]
    /// when the requested status is unreachable. Conflict and transition
    /// errors carry the stored task.
    pub async fn update_task(&self, request: UpdateTaskRequest) -> TaskLifecycleResult<Task> {
        let UpdateTaskRequest {
            task_id,
            actor,
            expected_updated_at,
            patch,
        } = request;

        patch.validate(&self.limits)?;
        let current = self
            .repository
            .find_by_id(task_id)
            .await?
            .ok_or(TaskLifecycleError::NotFound(task_id))?;
        if current.updated_at() != expected_updated_at {
            tracing::warn!(%task_id, %expected_updated_at, "stale task update rejected");
            return Err(TaskLifecycleError::conflict(expected_updated_at, current));
        }

        let mut updated = current.clone();
        let changes = match updated.apply_patch(patch, &*self.clock) {
            Ok(changes) => changes,
            Err(TaskDomainError::InvalidTransition { from, to, .. }) => {
                tracing::warn!(%task_id, %from, %to, "task transition rejected");
                return Err(TaskLifecycleError::InvalidTransition {
                    from,
                    to,
                    current: Box::new(current),
                });
            }
        };

        match self.repository.update(&updated, expected_updated_at).await {
            Ok(()) => {}
            Err(TaskRepositoryError::Conflict { current: stored }) => {
                tracing::warn!(%task_id, "concurrent task update rejected");
                return Err(TaskLifecycleError::conflict(expected_updated_at, *stored));
            }
            Err(other) => return Err(other.into()),
        }

        let description = if changes.is_empty() {
            format!("touched task \"{}\"", updated.title())
        } else {
            format!(
                "updated {} on task \"{}\"",
                changes.changed_fields().join(", "),
                updated.title()
            )
        };
        self.activity
            .record_committed(
                ActivityDraft::new(
                    ActivityKind::builtin(ActivityKind::TASK_UPDATED),
                    actor,
                    description,
                )
                .with_target(task_id)
                .with_metadata("changes", changes.to_metadata())
                .with_metadata("status", Value::from(updated.status().as_str())),
            )
            .await;

        tracing::info!(
            %task_id,
            %actor,
            status = %updated.status(),
            progress = updated.progress().value(),
            "task updated"
        );
        self.notifier.announce(
            NotificationEvent::TaskReassigned,
            &updated,
            changes.added_assignees(),
        );
        Ok(updated)
    }

    /// Returns a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no such task exists.
    pub async fn get_task(&self, task_id: TaskId) -> TaskLifecycleResult<Task> {
        self.repository
            .find_by_id(task_id)
            .await?
            .ok_or(TaskLifecycleError::NotFound(task_id))
    }

    /// Lists tasks selected by `filter`, most recently updated first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn list_tasks(&self, filter: TaskFilter) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.list(filter).await?)
    }
}
