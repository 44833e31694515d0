//! Shared world state for suggestion lifecycle BDD scenarios.

use std::sync::Arc;

use campusdesk::activity::{adapters::memory::InMemoryActivityRepository, services::ActivityLog};
use campusdesk::notification::{Notifier, adapters::NoopDispatcher};
use campusdesk::schema::UserId;
use campusdesk::suggestion::{
    adapters::memory::InMemorySuggestionRepository,
    domain::AiSuggestion,
    services::{AcceptedSuggestion, SuggestionLifecycleError, SuggestionLifecycleService},
};
use campusdesk::task::{
    adapters::memory::InMemoryTaskRepository,
    services::TaskLifecycleService,
};
use mockable::DefaultClock;
use rstest::fixture;

/// Task service type shared with the suggestion service.
pub type TestTaskService =
    TaskLifecycleService<InMemoryTaskRepository, InMemoryActivityRepository, NoopDispatcher, DefaultClock>;

/// Suggestion service type used by the BDD world.
pub type TestSuggestionService = SuggestionLifecycleService<
    InMemorySuggestionRepository,
    InMemoryTaskRepository,
    InMemoryActivityRepository,
    NoopDispatcher,
    DefaultClock,
>;

/// Scenario world for suggestion behaviour tests.
pub struct SuggestionWorld {
    pub service: TestSuggestionService,
    pub tasks: TestTaskService,
    pub recipient: UserId,
    pub suggestion: Option<AiSuggestion>,
    pub accepted: Option<AcceptedSuggestion>,
    pub last_error: Option<SuggestionLifecycleError>,
}

impl SuggestionWorld {
    /// Creates a world with no suggestion yet.
    #[must_use]
    pub fn new() -> Self {
        let clock = Arc::new(DefaultClock);
        let activity = ActivityLog::new(Arc::new(InMemoryActivityRepository::new()), Arc::clone(&clock));
        let tasks = TaskLifecycleService::new(
            Arc::new(InMemoryTaskRepository::new()),
            activity.clone(),
            Notifier::new(Arc::new(NoopDispatcher)),
            Arc::clone(&clock),
        );
        let service = SuggestionLifecycleService::new(
            Arc::new(InMemorySuggestionRepository::new()),
            tasks.clone(),
            activity,
            clock,
        );

        Self {
            service,
            tasks,
            recipient: UserId::new(),
            suggestion: None,
            accepted: None,
            last_error: None,
        }
    }

    /// Returns the suggestion under test.
    ///
    /// # Errors
    ///
    /// Returns an error when no suggestion has been recorded.
    pub fn current_suggestion(&self) -> Result<&AiSuggestion, eyre::Report> {
        self.suggestion
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing suggestion in scenario world"))
    }
}

impl Default for SuggestionWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> SuggestionWorld {
    SuggestionWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
