//! Service layer for recording, accepting, and dismissing suggestions.

use crate::activity::{
    domain::{ActivityDraft, ActivityKind},
    ports::ActivityRepository,
    services::ActivityLog,
};
use crate::error::ErrorKind;
use crate::notification::NotificationDispatcher;
use crate::schema::{SuggestionId, UserId, ValidationError};
use crate::suggestion::{
    domain::{AiSuggestion, NewSuggestion, SuggestionDomainError, SuggestionStatus},
    ports::{SuggestionRepository, SuggestionRepositoryError},
};
use crate::task::{
    domain::{NewTask, Task, TaskOrigin},
    ports::TaskRepository,
    services::{TaskLifecycleError, TaskLifecycleService},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Outcome of a successful acceptance.
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptedSuggestion {
    /// The task materialized from the suggestion.
    pub task: Task,
    /// The suggestion, now accepted.
    pub suggestion: AiSuggestion,
}

/// Service-level errors for suggestion operations.
#[derive(Debug, Error)]
pub enum SuggestionLifecycleError {
    /// Input validation failed; nothing was recorded.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The suggestion does not exist.
    #[error("suggestion not found: {0}")]
    NotFound(SuggestionId),

    /// The suggestion is no longer pending.
    #[error("invalid suggestion transition for {}: {from} -> {to}", .current.id())]
    InvalidTransition {
        /// Current status.
        from: SuggestionStatus,
        /// Requested status.
        to: SuggestionStatus,
        /// The suggestion as currently stored.
        current: Box<AiSuggestion>,
    },

    /// Materializing the task failed; the suggestion stayed pending.
    #[error(transparent)]
    Task(#[from] TaskLifecycleError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(SuggestionRepositoryError),
}

impl SuggestionLifecycleError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::InvalidTransition { .. } => ErrorKind::InvalidTransition,
            Self::Task(err) => err.kind(),
            Self::Repository(_) => ErrorKind::Internal,
        }
    }

    fn invalid_transition(to: SuggestionStatus, current: AiSuggestion) -> Self {
        Self::InvalidTransition {
            from: current.status(),
            to,
            current: Box::new(current),
        }
    }
}

impl From<SuggestionRepositoryError> for SuggestionLifecycleError {
    fn from(err: SuggestionRepositoryError) -> Self {
        match err {
            SuggestionRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for suggestion lifecycle operations.
pub type SuggestionLifecycleResult<T> = Result<T, SuggestionLifecycleError>;

/// Suggestion lifecycle orchestration service.
pub struct SuggestionLifecycleService<S, R, A, N, C>
where
    S: SuggestionRepository,
    R: TaskRepository,
    A: ActivityRepository,
    N: NotificationDispatcher,
    C: Clock + Send + Sync,
{
    suggestions: Arc<S>,
    tasks: TaskLifecycleService<R, A, N, C>,
    activity: ActivityLog<A, C>,
    clock: Arc<C>,
}

impl<S, R, A, N, C> Clone for SuggestionLifecycleService<S, R, A, N, C>
where
    S: SuggestionRepository,
    R: TaskRepository,
    A: ActivityRepository,
    N: NotificationDispatcher,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            suggestions: Arc::clone(&self.suggestions),
            tasks: self.tasks.clone(),
            activity: self.activity.clone(),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<S, R, A, N, C> SuggestionLifecycleService<S, R, A, N, C>
where
    S: SuggestionRepository,
    R: TaskRepository,
    A: ActivityRepository,
    N: NotificationDispatcher,
    C: Clock + Send + Sync,
{
    /// Creates a suggestion service that materializes tasks through `tasks`.
    #[must_use]
    pub const fn new(
        suggestions: Arc<S>,
        tasks: TaskLifecycleService<R, A, N, C>,
        activity: ActivityLog<A, C>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            suggestions,
            tasks,
            activity,
            clock,
        }
    }

    /// Records a generator-supplied suggestion as pending.
    ///
    /// # Errors
    ///
    /// Returns [`SuggestionLifecycleError::Validation`] when the payload is
    /// rejected.
    pub async fn record_suggestion(
        &self,
        input: NewSuggestion,
    ) -> SuggestionLifecycleResult<AiSuggestion> {
        let suggestion = AiSuggestion::record(input, self.tasks.limits(), &*self.clock)?;
        self.suggestions.store(&suggestion).await?;
        tracing::info!(
            suggestion_id = %suggestion.id(),
            user_id = %suggestion.user_id(),
            confidence = suggestion.confidence().value(),
            "suggestion recorded"
        );
        Ok(suggestion)
    }

    /// Accepts a pending suggestion and materializes it as a task assigned
    /// to the suggestion's recipient.
    ///
    /// The task payload is validated before the suggestion is claimed. If
    /// the task cannot be stored afterwards the claim is released and the
    /// suggestion stays pending. Once the task is stored the acceptance
    /// stands, even if the activity entry cannot be written.
    ///
    /// # Errors
    ///
    /// Returns [`SuggestionLifecycleError::NotFound`] for an unknown
    /// suggestion, [`SuggestionLifecycleError::InvalidTransition`] when it is
    /// not pending (including when a concurrent accept won), or
    /// [`SuggestionLifecycleError::Task`] when the task cannot be created.
    pub async fn accept_suggestion(
        &self,
        id: SuggestionId,
        actor: UserId,
    ) -> SuggestionLifecycleResult<AcceptedSuggestion> {
        let current = self.get_suggestion(id).await?;
        let mut accepted = current.clone();
        if let Err(SuggestionDomainError::InvalidTransition { from, to, .. }) =
            accepted.accept(&*self.clock)
        {
            tracing::warn!(suggestion_id = %id, %from, %to, "suggestion transition rejected");
            return Err(SuggestionLifecycleError::invalid_transition(to, current));
        }

        let task = self.tasks.prepare_task(
            seed_task(&current, actor),
            TaskOrigin::Suggestion { suggestion_id: id },
        )?;

        self.claim(&accepted, SuggestionStatus::Accepted).await?;

        let created = match self.tasks.commit_new_task(task).await {
            Ok(created) => created,
            Err(err) => {
                self.release(&accepted).await;
                return Err(err.into());
            }
        };

        self.activity
            .record_committed(
                ActivityDraft::new(
                    ActivityKind::builtin(ActivityKind::SUGGESTION_ACCEPTED),
                    actor,
                    format!("accepted suggestion \"{}\"", accepted.title()),
                )
                .with_target(id)
                .with_metadata("taskId", created.id().to_string())
                .with_metadata("type", accepted.category()),
            )
            .await;

        tracing::info!(
            suggestion_id = %id,
            task_id = %created.id(),
            %actor,
            "suggestion accepted"
        );
        Ok(AcceptedSuggestion {
            task: created,
            suggestion: accepted,
        })
    }

    /// Dismisses a pending suggestion.
    ///
    /// # Errors
    ///
    /// Returns [`SuggestionLifecycleError::NotFound`] for an unknown
    /// suggestion or [`SuggestionLifecycleError::InvalidTransition`] when it
    /// is not pending.
    pub async fn dismiss_suggestion(
        &self,
        id: SuggestionId,
        actor: UserId,
    ) -> SuggestionLifecycleResult<AiSuggestion> {
        let current = self.get_suggestion(id).await?;
        let mut dismissed = current.clone();
        if let Err(SuggestionDomainError::InvalidTransition { from, to, .. }) =
            dismissed.dismiss(&*self.clock)
        {
            tracing::warn!(suggestion_id = %id, %from, %to, "suggestion transition rejected");
            return Err(SuggestionLifecycleError::invalid_transition(to, current));
        }

        self.claim(&dismissed, SuggestionStatus::Dismissed).await?;
        self.activity
            .record_committed(
                ActivityDraft::new(
                    ActivityKind::builtin(ActivityKind::SUGGESTION_DISMISSED),
                    actor,
                    format!("dismissed suggestion \"{}\"", dismissed.title()),
                )
                .with_target(id)
                .with_metadata("type", dismissed.category()),
            )
            .await;

        tracing::info!(suggestion_id = %id, %actor, "suggestion dismissed");
        Ok(dismissed)
    }

    /// Returns a suggestion by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`SuggestionLifecycleError::NotFound`] when no such
    /// suggestion exists.
    pub async fn get_suggestion(&self, id: SuggestionId) -> SuggestionLifecycleResult<AiSuggestion> {
        self.suggestions
            .find_by_id(id)
            .await?
            .ok_or(SuggestionLifecycleError::NotFound(id))
    }

    /// Lists the recipient's suggestions, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`SuggestionLifecycleError::Repository`] when the lookup
    /// fails.
    pub async fn list_suggestions(
        &self,
        user_id: UserId,
        status: Option<SuggestionStatus>,
    ) -> SuggestionLifecycleResult<Vec<AiSuggestion>> {
        Ok(self.suggestions.list_for_user(user_id, status).await?)
    }

    /// Moves a pending suggestion to `target` unless another caller got
    /// there first.
    async fn claim(
        &self,
        suggestion: &AiSuggestion,
        target: SuggestionStatus,
    ) -> SuggestionLifecycleResult<()> {
        match self
            .suggestions
            .transition(suggestion, SuggestionStatus::Pending)
            .await
        {
            Ok(()) => Ok(()),
            Err(SuggestionRepositoryError::Conflict { current }) => {
                tracing::warn!(
                    suggestion_id = %suggestion.id(),
                    status = %current.status(),
                    "concurrent suggestion decision rejected"
                );
                Err(SuggestionLifecycleError::invalid_transition(target, *current))
            }
            Err(other) => Err(other.into()),
        }
    }

    async fn release(&self, accepted: &AiSuggestion) {
        let mut reopened = accepted.clone();
        reopened.reopen(&*self.clock);
        if let Err(err) = self
            .suggestions
            .transition(&reopened, SuggestionStatus::Accepted)
            .await
        {
            tracing::error!(
                suggestion_id = %accepted.id(),
                error = %err,
                "failed to release suggestion after task creation failed"
            );
        }
    }
}

fn seed_task(suggestion: &AiSuggestion, actor: UserId) -> NewTask {
    let input = NewTask::new(suggestion.title(), actor, [suggestion.user_id()])
        .with_priority(suggestion.priority());
    if suggestion.description().trim().is_empty() {
        input
    } else {
        input.with_description(suggestion.description())
    }
}
