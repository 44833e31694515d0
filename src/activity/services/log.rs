//! Activity log service: the only way other components record history.

use crate::activity::{
    domain::{Activity, ActivityDraft, ActivityFilter},
    ports::{ActivityRepository, ActivityRepositoryError},
};
use crate::error::ErrorKind;
use crate::schema::ValidationError;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for activity operations.
#[derive(Debug, Error)]
pub enum ActivityLogError {
    /// The draft was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] ActivityRepositoryError),
}

impl ActivityLogError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Repository(_) => ErrorKind::Internal,
        }
    }
}

/// Result type for activity log operations.
pub type ActivityLogResult<T> = Result<T, ActivityLogError>;

/// Append-only activity log.
pub struct ActivityLog<A, C>
where
    A: ActivityRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<A>,
    clock: Arc<C>,
}

impl<A, C> Clone for ActivityLog<A, C>
where
    A: ActivityRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<A, C> ActivityLog<A, C>
where
    A: ActivityRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new activity log.
    #[must_use]
    pub const fn new(repository: Arc<A>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Appends an entry stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityLogError`] when the draft is invalid or the
    /// repository rejects the append.
    pub async fn record(&self, draft: ActivityDraft) -> ActivityLogResult<Activity> {
        let activity = draft.into_activity(&*self.clock)?;
        self.repository.append(&activity).await?;
        tracing::debug!(
            activity_id = %activity.id,
            kind = %activity.kind,
            user_id = %activity.user_id,
            "activity recorded"
        );
        Ok(activity)
    }

    /// Appends an entry describing a mutation that is already committed.
    ///
    /// The mutation stands whatever happens here, so a failed append is
    /// logged at `error` and reported as `None` instead of an error.
    pub async fn record_committed(&self, draft: ActivityDraft) -> Option<Activity> {
        let kind = draft.kind().clone();
        match self.record(draft).await {
            Ok(activity) => Some(activity),
            Err(error) => {
                tracing::error!(%kind, %error, "activity for committed mutation not recorded");
                None
            }
        }
    }

    /// Returns entries matching `filter`, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityLogError::Repository`] when the lookup fails.
    pub async fn feed(&self, filter: &ActivityFilter) -> ActivityLogResult<Vec<Activity>> {
        Ok(self.repository.query(filter).await?)
    }
}
