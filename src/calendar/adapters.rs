//! In-memory calendar repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::calendar::{
    domain::CalendarEvent,
    ports::{CalendarFilter, CalendarRepository, CalendarRepositoryError, CalendarRepositoryResult},
};
use crate::schema::CalendarEventId;

/// Thread-safe in-memory calendar repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCalendarRepository {
    state: Arc<RwLock<HashMap<CalendarEventId, CalendarEvent>>>,
}

impl InMemoryCalendarRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl ToString) -> CalendarRepositoryError {
    CalendarRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl CalendarRepository for InMemoryCalendarRepository {
    async fn store(&self, event: &CalendarEvent) -> CalendarRepositoryResult<()> {
        let mut events = self.state.write().map_err(poisoned)?;
        if events.contains_key(&event.id()) {
            return Err(CalendarRepositoryError::DuplicateEvent(event.id()));
        }
        events.insert(event.id(), event.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: CalendarEventId) -> CalendarRepositoryResult<Option<CalendarEvent>> {
        let events = self.state.read().map_err(poisoned)?;
        Ok(events.get(&id).cloned())
    }

    async fn list(&self, filter: CalendarFilter) -> CalendarRepositoryResult<Vec<CalendarEvent>> {
        let events = self.state.read().map_err(poisoned)?;
        let mut selected: Vec<CalendarEvent> = events
            .values()
            .filter(|event| filter.matches(event))
            .cloned()
            .collect();
        selected.sort_by_key(|event| (event.start_date(), event.end_date(), event.id()));
        Ok(selected)
    }
}
