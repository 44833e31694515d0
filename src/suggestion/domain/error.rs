//! Suggestion domain errors.

use super::SuggestionStatus;
use crate::schema::SuggestionId;
use thiserror::Error;

/// Errors raised by suggestion state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SuggestionDomainError {
    /// The suggestion is not in a state that allows the change.
    #[error("invalid suggestion transition for {suggestion_id}: {from} -> {to}")]
    InvalidTransition {
        /// Suggestion being changed.
        suggestion_id: SuggestionId,
        /// Current status.
        from: SuggestionStatus,
        /// Requested status.
        to: SuggestionStatus,
    },
}
