//! Append-only repository port for activity entries.

use crate::activity::domain::{Activity, ActivityFilter};
use crate::schema::ActivityId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for activity repository operations.
pub type ActivityRepositoryResult<T> = Result<T, ActivityRepositoryError>;

/// Activity persistence contract.
///
/// There is no update or delete operation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Appends an entry.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityRepositoryError::DuplicateActivity`] when the entry
    /// ID already exists.
    async fn append(&self, activity: &Activity) -> ActivityRepositoryResult<()>;

    /// Returns entries matching `filter`, most recent first.
    ///
    /// Entries sharing a timestamp come back in reverse append order.
    async fn query(&self, filter: &ActivityFilter) -> ActivityRepositoryResult<Vec<Activity>>;
}

/// Errors returned by activity repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ActivityRepositoryError {
    /// An entry with the same identifier already exists.
    #[error("duplicate activity identifier: {0}")]
    DuplicateActivity(ActivityId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ActivityRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
