//! In-memory suggestion repository.

use async_trait::async_trait;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::schema::{SuggestionId, UserId};
use crate::suggestion::{
    domain::{AiSuggestion, SuggestionStatus},
    ports::{SuggestionRepository, SuggestionRepositoryError, SuggestionRepositoryResult},
};

/// Thread-safe in-memory suggestion repository.
#[derive(Debug, Clone, Default)]
pub struct InMemorySuggestionRepository {
    state: Arc<RwLock<HashMap<SuggestionId, AiSuggestion>>>,
}

impl InMemorySuggestionRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl ToString) -> SuggestionRepositoryError {
    SuggestionRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl SuggestionRepository for InMemorySuggestionRepository {
    async fn store(&self, suggestion: &AiSuggestion) -> SuggestionRepositoryResult<()> {
        let mut suggestions = self.state.write().map_err(poisoned)?;
        if suggestions.contains_key(&suggestion.id()) {
            return Err(SuggestionRepositoryError::DuplicateSuggestion(suggestion.id()));
        }
        suggestions.insert(suggestion.id(), suggestion.clone());
        Ok(())
    }

    async fn transition(
        &self,
        suggestion: &AiSuggestion,
        expected_status: SuggestionStatus,
    ) -> SuggestionRepositoryResult<()> {
        let mut suggestions = self.state.write().map_err(poisoned)?;
        let stored = suggestions
            .get(&suggestion.id())
            .ok_or(SuggestionRepositoryError::NotFound(suggestion.id()))?;
        if stored.status() != expected_status {
            return Err(SuggestionRepositoryError::Conflict {
                current: Box::new(stored.clone()),
            });
        }
        suggestions.insert(suggestion.id(), suggestion.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: SuggestionId) -> SuggestionRepositoryResult<Option<AiSuggestion>> {
        let suggestions = self.state.read().map_err(poisoned)?;
        Ok(suggestions.get(&id).cloned())
    }

    async fn list_for_user(
        &self,
        user_id: UserId,
        status: Option<SuggestionStatus>,
    ) -> SuggestionRepositoryResult<Vec<AiSuggestion>> {
        let suggestions = self.state.read().map_err(poisoned)?;
        let mut selected: Vec<AiSuggestion> = suggestions
            .values()
            .filter(|suggestion| suggestion.user_id() == user_id)
            .filter(|suggestion| status.is_none_or(|wanted| suggestion.status() == wanted))
            .cloned()
            .collect();
        selected.sort_by_key(|suggestion| (Reverse(suggestion.created_at()), suggestion.id()));
        Ok(selected)
    }
}
