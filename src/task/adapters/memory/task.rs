//! In-memory repository for tasks.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::schema::TaskId;
use crate::task::{
    domain::Task,
    ports::{TaskFilter, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<HashMap<TaskId, Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl ToString) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.state.write().map_err(poisoned)?;
        if tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn update(
        &self,
        task: &Task,
        expected_updated_at: DateTime<Utc>,
    ) -> TaskRepositoryResult<()> {
        let mut tasks = self.state.write().map_err(poisoned)?;
        let stored = tasks
            .get(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        if stored.updated_at() != expected_updated_at {
            return Err(TaskRepositoryError::Conflict {
                current: Box::new(stored.clone()),
            });
        }
        tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let tasks = self.state.read().map_err(poisoned)?;
        Ok(tasks.get(&id).cloned())
    }

    async fn list(&self, filter: TaskFilter) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.state.read().map_err(poisoned)?;
        let mut selected: Vec<Task> = tasks
            .values()
            .filter(|task| filter.matches(task))
            .cloned()
            .collect();
        selected.sort_by_key(|task| (Reverse(task.updated_at()), Reverse(task.created_at()), task.id()));
        Ok(selected)
    }
}
