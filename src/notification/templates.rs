//! Subject and body templates rendered with `minijinja`.

use super::ports::{NotificationError, NotificationEvent};
use crate::task::domain::Task;
use minijinja::{Environment, context};
use serde::{Deserialize, Serialize};

/// Templates for every notification event.
///
/// Templates see `title`, `priority`, `status`, `due_date` (RFC 3339 or
/// absent), and `task_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationTemplates {
    /// Subject for [`NotificationEvent::TaskAssigned`].
    pub assigned_subject: String,
    /// Body for [`NotificationEvent::TaskAssigned`].
    pub assigned_body: String,
    /// Subject for [`NotificationEvent::TaskReassigned`].
    pub reassigned_subject: String,
    /// Body for [`NotificationEvent::TaskReassigned`].
    pub reassigned_body: String,
}

impl Default for NotificationTemplates {
    fn default() -> Self {
        Self {
            assigned_subject: "New task: {{ title }}".to_owned(),
            assigned_body: concat!(
                "You have been assigned \"{{ title }}\" ({{ priority }} priority)",
                "{% if due_date %}, due {{ due_date }}{% endif %}."
            )
            .to_owned(),
            reassigned_subject: "Task assigned to you: {{ title }}".to_owned(),
            reassigned_body: concat!(
                "You have been added to \"{{ title }}\", currently {{ status }}",
                "{% if due_date %}, due {{ due_date }}{% endif %}."
            )
            .to_owned(),
        }
    }
}

impl NotificationTemplates {
    /// Renders the subject and body for `event` about `task`.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::Template`] when a template fails to
    /// render.
    pub fn render(
        &self,
        event: NotificationEvent,
        task: &Task,
    ) -> Result<(String, String), NotificationError> {
        let (subject_template, body_template) = match event {
            NotificationEvent::TaskAssigned => (&self.assigned_subject, &self.assigned_body),
            NotificationEvent::TaskReassigned => {
                (&self.reassigned_subject, &self.reassigned_body)
            }
        };
        let environment = Environment::new();
        let ctx = context! {
            task_id => task.id().to_string(),
            title => task.title(),
            priority => task.priority().as_str(),
            status => task.status().as_str(),
            due_date => task.due_date().map(|due| due.to_rfc3339()),
        };
        let render = |template: &str| {
            environment
                .render_str(template, &ctx)
                .map_err(|error| NotificationError::Template {
                    event,
                    reason: error.to_string(),
                })
        };
        Ok((render(subject_template)?, render(body_template)?))
    }
}
