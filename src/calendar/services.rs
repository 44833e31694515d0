//! Calendar service.

use crate::calendar::{
    domain::{CalendarEvent, NewCalendarEvent},
    ports::{CalendarFilter, CalendarRepository, CalendarRepositoryError},
};
use crate::error::ErrorKind;
use crate::schema::{CalendarEventId, SchemaLimits, UserId, ValidationError};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised by [`CalendarService`].
#[derive(Debug, Error)]
pub enum CalendarError {
    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The event does not exist.
    #[error("calendar event not found: {0}")]
    NotFound(CalendarEventId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] CalendarRepositoryError),
}

impl CalendarError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Repository(_) => ErrorKind::Internal,
        }
    }
}

/// Result type for calendar operations.
pub type CalendarResult<T> = Result<T, CalendarError>;

/// Calendar service.
#[derive(Clone)]
pub struct CalendarService<R, C>
where
    R: CalendarRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    limits: SchemaLimits,
}

impl<R, C> CalendarService<R, C>
where
    R: CalendarRepository,
    C: Clock + Send + Sync,
{
    /// Creates a calendar service with default schema limits.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            limits: SchemaLimits::default(),
        }
    }

    /// Creates an event.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Validation`] for a blank title or an end
    /// before the start.
    pub async fn create_event(&self, input: NewCalendarEvent) -> CalendarResult<CalendarEvent> {
        let event = CalendarEvent::create(input, &self.limits, &*self.clock)?;
        self.repository.store(&event).await?;
        tracing::info!(
            event_id = %event.id(),
            kind = %event.kind(),
            start = %event.start_date(),
            "calendar event created"
        );
        Ok(event)
    }

    /// Returns an event by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::NotFound`] when no such event exists.
    pub async fn get_event(&self, id: CalendarEventId) -> CalendarResult<CalendarEvent> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(CalendarError::NotFound(id))
    }

    /// Lists events overlapping `[from, to]`, earliest first.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Validation`] when `to` precedes `from`.
    pub async fn list_events_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> CalendarResult<Vec<CalendarEvent>> {
        if to < from {
            return Err(ValidationError::single("to", "must not be earlier than from").into());
        }
        Ok(self.repository.list(CalendarFilter::Between { from, to }).await?)
    }

    /// Lists events the user attends or organised, earliest first.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Repository`] when the lookup fails.
    pub async fn list_events_for_attendee(&self, user: UserId) -> CalendarResult<Vec<CalendarEvent>> {
        Ok(self.repository.list(CalendarFilter::Involving(user)).await?)
    }
}
