//! Notification dispatch for task assignment events.
//!
//! The core announces assignments through the [`NotificationDispatcher`]
//! port. Delivery is fire-and-forget: a failed dispatch is logged and never
//! rolls back or blocks the mutation that triggered it.

pub mod adapters;
mod notifier;
pub mod ports;
mod templates;

pub use notifier::Notifier;
pub use ports::{Notification, NotificationDispatcher, NotificationError, NotificationEvent};
pub use templates::NotificationTemplates;
