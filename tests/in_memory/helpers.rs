//! Shared wiring for in-memory integration tests.

use std::sync::Arc;

use campusdesk::activity::{adapters::memory::InMemoryActivityRepository, services::ActivityLog};
use campusdesk::aggregation::services::AggregationService;
use campusdesk::clock::ManualClock;
use campusdesk::notification::{Notification, Notifier, adapters::ChannelDispatcher};
use campusdesk::schema::UserId;
use campusdesk::suggestion::{
    adapters::memory::InMemorySuggestionRepository, services::SuggestionLifecycleService,
};
use campusdesk::task::{
    adapters::memory::{InMemoryTaskCommentRepository, InMemoryTaskRepository},
    domain::{Task, TaskPatch, TaskStatus},
    services::{TaskCommentService, TaskLifecycleService, UpdateTaskRequest},
};
use campusdesk::user::{
    adapters::memory::InMemoryUserRepository,
    domain::{NewUser, User, UserRole},
    services::UserDirectoryService,
};
use chrono::{DateTime, TimeZone, Utc};
use rstest::fixture;
use tokio::sync::mpsc::UnboundedReceiver;

/// Task service wired for integration tests.
pub type Tasks =
    TaskLifecycleService<InMemoryTaskRepository, InMemoryActivityRepository, ChannelDispatcher, ManualClock>;

/// Every service of the core, sharing one set of stores and one clock.
pub struct Campus {
    pub clock: ManualClock,
    pub activity: ActivityLog<InMemoryActivityRepository, ManualClock>,
    pub tasks: Tasks,
    pub comments: TaskCommentService<
        InMemoryTaskRepository,
        InMemoryTaskCommentRepository,
        InMemoryActivityRepository,
        ManualClock,
    >,
    pub suggestions: SuggestionLifecycleService<
        InMemorySuggestionRepository,
        InMemoryTaskRepository,
        InMemoryActivityRepository,
        ChannelDispatcher,
        ManualClock,
    >,
    pub users: UserDirectoryService<InMemoryUserRepository, ManualClock>,
    pub stats: AggregationService<InMemoryTaskRepository, InMemoryUserRepository, ManualClock>,
    pub notifications: UnboundedReceiver<Notification>,
}

/// First morning of the autumn term.
#[must_use]
pub fn term_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 1, 8, 30, 0)
        .single()
        .expect("valid timestamp")
}

/// Provides a fully wired campus with the clock at [`term_start`].
#[fixture]
pub fn campus() -> Campus {
    let clock = ManualClock::new(term_start());
    let shared = Arc::new(clock.clone());
    let task_store = Arc::new(InMemoryTaskRepository::new());
    let user_store = Arc::new(InMemoryUserRepository::new());
    let activity = ActivityLog::new(Arc::new(InMemoryActivityRepository::new()), Arc::clone(&shared));
    let (dispatcher, notifications) = ChannelDispatcher::new();

    let tasks = TaskLifecycleService::new(
        Arc::clone(&task_store),
        activity.clone(),
        Notifier::new(Arc::new(dispatcher)),
        Arc::clone(&shared),
    );
    let comments = TaskCommentService::new(
        Arc::clone(&task_store),
        Arc::new(InMemoryTaskCommentRepository::new()),
        activity.clone(),
        Arc::clone(&shared),
    );
    let suggestions = SuggestionLifecycleService::new(
        Arc::new(InMemorySuggestionRepository::new()),
        tasks.clone(),
        activity.clone(),
        Arc::clone(&shared),
    );
    let users = UserDirectoryService::new(Arc::clone(&user_store), Arc::clone(&shared));
    let stats = AggregationService::new(task_store, user_store, shared);

    Campus {
        clock,
        activity,
        tasks,
        comments,
        suggestions,
        users,
        stats,
        notifications,
    }
}

impl Campus {
    /// Provisions a user, panicking on failure.
    pub async fn provision(&self, email: &str, first: &str, last: &str, role: UserRole) -> User {
        self.users
            .provision_user(NewUser::new(email, first, last, role))
            .await
            .expect("provisioning should succeed")
    }

    /// Moves `task` to `status` on behalf of `actor`, panicking on failure.
    pub async fn move_task(&self, task: &Task, actor: UserId, status: TaskStatus) -> Task {
        self.tasks
            .update_task(UpdateTaskRequest::new(
                task.id(),
                actor,
                task.updated_at(),
                TaskPatch::new().with_status(status),
            ))
            .await
            .expect("status change should succeed")
    }

    /// Drains every notification dispatched so far.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        let mut drained = Vec::new();
        while let Ok(notification) = self.notifications.try_recv() {
            drained.push(notification);
        }
        drained
    }
}
