//! In-memory repository for task comments.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::schema::{CommentId, TaskId};
use crate::task::{
    domain::TaskComment,
    ports::{TaskCommentRepository, TaskCommentRepositoryError, TaskCommentRepositoryResult},
};

/// Thread-safe in-memory comment repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskCommentRepository {
    state: Arc<RwLock<HashMap<CommentId, TaskComment>>>,
}

impl InMemoryTaskCommentRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl ToString) -> TaskCommentRepositoryError {
    TaskCommentRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskCommentRepository for InMemoryTaskCommentRepository {
    async fn store(&self, comment: &TaskComment) -> TaskCommentRepositoryResult<()> {
        let mut comments = self.state.write().map_err(poisoned)?;
        if comments.contains_key(&comment.id()) {
            return Err(TaskCommentRepositoryError::DuplicateComment(comment.id()));
        }
        comments.insert(comment.id(), comment.clone());
        Ok(())
    }

    async fn update(&self, comment: &TaskComment) -> TaskCommentRepositoryResult<()> {
        let mut comments = self.state.write().map_err(poisoned)?;
        if !comments.contains_key(&comment.id()) {
            return Err(TaskCommentRepositoryError::NotFound(comment.id()));
        }
        comments.insert(comment.id(), comment.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: CommentId) -> TaskCommentRepositoryResult<Option<TaskComment>> {
        let comments = self.state.read().map_err(poisoned)?;
        Ok(comments.get(&id).cloned())
    }

    async fn list_for_task(&self, task_id: TaskId) -> TaskCommentRepositoryResult<Vec<TaskComment>> {
        let comments = self.state.read().map_err(poisoned)?;
        let mut selected: Vec<TaskComment> = comments
            .values()
            .filter(|comment| comment.task_id() == task_id)
            .cloned()
            .collect();
        selected.sort_by_key(|comment| (comment.created_at(), comment.id()));
        Ok(selected)
    }
}
