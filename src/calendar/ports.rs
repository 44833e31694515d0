//! Repository port for calendar events.

use crate::calendar::domain::CalendarEvent;
use crate::schema::{CalendarEventId, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for calendar repository operations.
pub type CalendarRepositoryResult<T> = Result<T, CalendarRepositoryError>;

/// Selection applied when listing events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarFilter {
    /// Events overlapping the closed range.
    Between {
        /// Range start.
        from: DateTime<Utc>,
        /// Range end.
        to: DateTime<Utc>,
    },
    /// Events the user attends or organised.
    Involving(UserId),
}

impl CalendarFilter {
    /// Returns `true` when `event` is selected by this filter.
    #[must_use]
    pub fn matches(self, event: &CalendarEvent) -> bool {
        match self {
            Self::Between { from, to } => event.overlaps(from, to),
            Self::Involving(user) => event.involves(user),
        }
    }
}

/// Calendar persistence contract.
#[async_trait]
pub trait CalendarRepository: Send + Sync {
    /// Stores a new event.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarRepositoryError::DuplicateEvent`] when the
    /// identifier already exists.
    async fn store(&self, event: &CalendarEvent) -> CalendarRepositoryResult<()>;

    /// Finds an event by identifier.
    async fn find_by_id(&self, id: CalendarEventId) -> CalendarRepositoryResult<Option<CalendarEvent>>;

    /// Returns the events selected by `filter`, earliest start first.
    async fn list(&self, filter: CalendarFilter) -> CalendarRepositoryResult<Vec<CalendarEvent>>;
}

/// Errors returned by calendar repository implementations.
#[derive(Debug, Clone, Error)]
pub enum CalendarRepositoryError {
    /// An event with the same identifier already exists.
    #[error("duplicate calendar event identifier: {0}")]
    DuplicateEvent(CalendarEventId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl CalendarRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
