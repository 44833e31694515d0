//! Domain model for AI suggestions.

mod confidence;
mod error;
mod suggestion;

pub use confidence::Confidence;
pub use error::SuggestionDomainError;
pub use suggestion::{AiSuggestion, NewSuggestion, SuggestionStatus};
