//! Dispatcher that forwards notifications over a tokio channel.

use crate::notification::ports::{Notification, NotificationDispatcher, NotificationError};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Dispatcher backed by an unbounded mpsc channel.
///
/// A delivery worker owns the receiving half; sending never blocks.
#[derive(Debug, Clone)]
pub struct ChannelDispatcher {
    sender: UnboundedSender<Notification>,
}

impl ChannelDispatcher {
    /// Creates a dispatcher and the receiver a delivery worker drains.
    #[must_use]
    pub fn new() -> (Self, UnboundedReceiver<Notification>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl NotificationDispatcher for ChannelDispatcher {
    fn notify(&self, notification: Notification) -> Result<(), NotificationError> {
        self.sender
            .send(notification)
            .map_err(|_| NotificationError::ChannelClosed)
    }
}
