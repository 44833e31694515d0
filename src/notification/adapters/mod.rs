//! Notification dispatcher adapters.

mod channel;
mod noop;

pub use channel::ChannelDispatcher;
pub use noop::NoopDispatcher;
