//! Renders and dispatches assignment notifications without failing callers.

use super::{Notification, NotificationDispatcher, NotificationEvent, NotificationTemplates};
use crate::schema::UserId;
use crate::task::domain::Task;
use std::sync::Arc;

/// Bridges task services to a [`NotificationDispatcher`].
///
/// Rendering and dispatch failures are logged at `warn` and swallowed.
pub struct Notifier<N>
where
    N: NotificationDispatcher,
{
    dispatcher: Arc<N>,
    templates: Arc<NotificationTemplates>,
}

impl<N> Clone for Notifier<N>
where
    N: NotificationDispatcher,
{
    fn clone(&self) -> Self {
        Self {
            dispatcher: Arc::clone(&self.dispatcher),
            templates: Arc::clone(&self.templates),
        }
    }
}

impl<N> Notifier<N>
where
    N: NotificationDispatcher,
{
    /// Creates a notifier using the default templates.
    #[must_use]
    pub fn new(dispatcher: Arc<N>) -> Self {
        Self::with_templates(dispatcher, NotificationTemplates::default())
    }

    /// Creates a notifier with custom templates.
    #[must_use]
    pub fn with_templates(dispatcher: Arc<N>, templates: NotificationTemplates) -> Self {
        Self {
            dispatcher,
            templates: Arc::new(templates),
        }
    }

    /// Announces `event` about `task` to `recipients`.
    ///
    /// Does nothing when `recipients` is empty.
    pub fn announce(&self, event: NotificationEvent, task: &Task, recipients: &[UserId]) {
        if recipients.is_empty() {
            return;
        }
        let (subject, body) = match self.templates.render(event, task) {
            Ok(rendered) => rendered,
            Err(error) => {
                tracing::warn!(task_id = %task.id(), %event, %error, "notification not rendered");
                return;
            }
        };
        let notification = Notification {
            event,
            recipients: recipients.to_vec(),
            task_id: task.id(),
            subject,
            body,
        };
        if let Err(error) = self.dispatcher.notify(notification) {
            tracing::warn!(task_id = %task.id(), %event, %error, "notification dispatch failed");
        }
    }
}
