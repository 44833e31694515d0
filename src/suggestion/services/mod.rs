//! Orchestration services for suggestions.

mod lifecycle;

pub use lifecycle::{
    AcceptedSuggestion,
    SuggestionLifecycleError,
    SuggestionLifecycleResult,
    SuggestionLifecycleService,
};
