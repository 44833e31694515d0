//! Dispatcher that discards every notification.

use crate::notification::ports::{Notification, NotificationDispatcher, NotificationError};

/// Dispatcher for hosts without a notification provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDispatcher;

impl NotificationDispatcher for NoopDispatcher {
    fn notify(&self, notification: Notification) -> Result<(), NotificationError> {
        tracing::trace!(
            event = %notification.event,
            task_id = %notification.task_id,
            "notification discarded"
        );
        Ok(())
    }
}
