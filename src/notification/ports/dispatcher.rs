//! Notification payload and dispatcher port.

use crate::schema::{TaskId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Event that triggered a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationEvent {
    /// A new task was created with the recipients as assignees.
    TaskAssigned,
    /// An existing task gained the recipients as assignees.
    TaskReassigned,
}

impl NotificationEvent {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TaskAssigned => "task_assigned",
            Self::TaskReassigned => "task_reassigned",
        }
    }
}

impl fmt::Display for NotificationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rendered notification ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Triggering event.
    pub event: NotificationEvent,
    /// Users to notify.
    pub recipients: Vec<UserId>,
    /// The task concerned.
    pub task_id: TaskId,
    /// Rendered subject line.
    pub subject: String,
    /// Rendered body.
    pub body: String,
}

/// Errors raised while rendering or handing off a notification.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotificationError {
    /// A template failed to render.
    #[error("failed to render {event} template: {reason}")]
    Template {
        /// The event being rendered.
        event: NotificationEvent,
        /// Renderer message.
        reason: String,
    },
    /// The delivery channel is closed.
    #[error("notification channel closed")]
    ChannelClosed,
    /// The downstream provider refused the notification.
    #[error("notification delivery failed: {0}")]
    Delivery(String),
}

/// Fire-and-forget notification delivery.
///
/// Implementations must not block: hand the notification to a queue or
/// background task and return. The return value is only used for logging.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationDispatcher: Send + Sync {
    /// Hands a notification off for at-most-once delivery.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError`] when the hand-off fails.
    fn notify(&self, notification: Notification) -> Result<(), NotificationError>;
}
