//! In-memory activity log.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::activity::{
    domain::{Activity, ActivityFilter},
    ports::{ActivityRepository, ActivityRepositoryError, ActivityRepositoryResult},
};

/// Thread-safe in-memory activity repository.
///
/// Entries are kept sorted by `created_at` ascending; an entry whose
/// timestamp ties an existing one is placed after it.
#[derive(Debug, Clone, Default)]
pub struct InMemoryActivityRepository {
    entries: Arc<RwLock<Vec<Activity>>>,
}

impl InMemoryActivityRepository {
    /// Creates an empty in-memory log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl ToString) -> ActivityRepositoryError {
    ActivityRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ActivityRepository for InMemoryActivityRepository {
    async fn append(&self, activity: &Activity) -> ActivityRepositoryResult<()> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        if entries.iter().any(|entry| entry.id == activity.id) {
            return Err(ActivityRepositoryError::DuplicateActivity(activity.id));
        }
        let position = entries.partition_point(|entry| entry.created_at <= activity.created_at);
        entries.insert(position, activity.clone());
        Ok(())
    }

    async fn query(&self, filter: &ActivityFilter) -> ActivityRepositoryResult<Vec<Activity>> {
        let entries = self.entries.read().map_err(poisoned)?;
        let matching = entries
            .iter()
            .rev()
            .filter(|entry| filter.matches(entry))
            .cloned();
        Ok(match filter.limit() {
            Some(limit) => matching.take(limit).collect(),
            None => matching.collect(),
        })
    }
}
