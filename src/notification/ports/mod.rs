//! Port contract for notification delivery.

mod dispatcher;

pub use dispatcher::{Notification, NotificationDispatcher, NotificationError, NotificationEvent};

#[cfg(test)]
pub use dispatcher::MockNotificationDispatcher;
