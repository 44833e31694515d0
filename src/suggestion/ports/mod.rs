//! Port contracts for suggestion persistence.

mod repository;

pub use repository::{SuggestionRepository, SuggestionRepositoryError, SuggestionRepositoryResult};
