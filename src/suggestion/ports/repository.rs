//! Repository port for AI suggestions.

use crate::schema::{SuggestionId, UserId};
use crate::suggestion::domain::{AiSuggestion, SuggestionStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for suggestion repository operations.
pub type SuggestionRepositoryResult<T> = Result<T, SuggestionRepositoryError>;

/// Suggestion persistence contract.
#[async_trait]
pub trait SuggestionRepository: Send + Sync {
    /// Stores a new suggestion.
    ///
    /// # Errors
    ///
    /// Returns [`SuggestionRepositoryError::DuplicateSuggestion`] when the
    /// identifier already exists.
    async fn store(&self, suggestion: &AiSuggestion) -> SuggestionRepositoryResult<()>;

    /// Replaces a suggestion if its stored status still equals
    /// `expected_status`.
    ///
    /// The comparison and the write happen as one atomic step, so two
    /// callers racing from the same status cannot both succeed.
    ///
    /// # Errors
    ///
    /// Returns [`SuggestionRepositoryError::NotFound`] when the suggestion
    /// does not exist or [`SuggestionRepositoryError::Conflict`] carrying the
    /// stored record when its status differs.
    async fn transition(
        &self,
        suggestion: &AiSuggestion,
        expected_status: SuggestionStatus,
    ) -> SuggestionRepositoryResult<()>;

    /// Finds a suggestion by identifier.
    async fn find_by_id(&self, id: SuggestionId) -> SuggestionRepositoryResult<Option<AiSuggestion>>;

    /// Returns the recipient's suggestions, newest first, optionally
    /// restricted to one status.
    async fn list_for_user(
        &self,
        user_id: UserId,
        status: Option<SuggestionStatus>,
    ) -> SuggestionRepositoryResult<Vec<AiSuggestion>>;
}

/// Errors returned by suggestion repository implementations.
#[derive(Debug, Clone, Error)]
pub enum SuggestionRepositoryError {
    /// A suggestion with the same identifier already exists.
    #[error("duplicate suggestion identifier: {0}")]
    DuplicateSuggestion(SuggestionId),

    /// The suggestion was not found.
    #[error("suggestion not found: {0}")]
    NotFound(SuggestionId),

    /// The stored status no longer matches the expected one.
    #[error("suggestion {} is now {}", .current.id(), .current.status())]
    Conflict {
        /// The suggestion as currently stored.
        current: Box<AiSuggestion>,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl SuggestionRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
