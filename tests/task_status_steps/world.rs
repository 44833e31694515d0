//! Shared world state for task status BDD scenarios.

use std::sync::Arc;

use campusdesk::activity::{adapters::memory::InMemoryActivityRepository, services::ActivityLog};
use campusdesk::notification::{Notifier, adapters::NoopDispatcher};
use campusdesk::schema::{ParseValueError, UserId};
use campusdesk::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::Task,
    services::{TaskLifecycleError, TaskLifecycleService},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestTaskService =
    TaskLifecycleService<InMemoryTaskRepository, InMemoryActivityRepository, NoopDispatcher, DefaultClock>;

/// Scenario world for task status behaviour tests.
pub struct TaskStatusWorld {
    pub service: TestTaskService,
    pub actor: UserId,
    pub task: Option<Task>,
    pub stale_copy: Option<Task>,
    pub last_update: Option<Result<Task, TaskLifecycleError>>,
    pub parse_error: Option<ParseValueError>,
}

impl TaskStatusWorld {
    /// Creates a world with no task yet.
    #[must_use]
    pub fn new() -> Self {
        let clock = Arc::new(DefaultClock);
        let activity = ActivityLog::new(Arc::new(InMemoryActivityRepository::new()), Arc::clone(&clock));
        let service = TaskLifecycleService::new(
            Arc::new(InMemoryTaskRepository::new()),
            activity,
            Notifier::new(Arc::new(NoopDispatcher)),
            clock,
        );

        Self {
            service,
            actor: UserId::new(),
            task: None,
            stale_copy: None,
            last_update: None,
            parse_error: None,
        }
    }

    /// Returns the most recently observed task.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has been created in this scenario.
    pub fn current_task(&self) -> Result<&Task, eyre::Report> {
        self.task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }
}

impl Default for TaskStatusWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskStatusWorld {
    TaskStatusWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
