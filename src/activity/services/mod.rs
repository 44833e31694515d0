//! Application service for recording and reading activity.

mod log;

pub use log::{ActivityLog, ActivityLogError, ActivityLogResult};
