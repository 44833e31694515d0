//! Domain model for task lifecycle management.
//!
//! The task domain holds the task aggregate, its status/progress state
//! machine, the inbound payloads validated at the boundary, and task
//! comments. Infrastructure concerns stay outside this module.

mod changes;
mod comment;
mod error;
mod input;
mod progress;
mod status;
mod task;

pub use changes::TaskChanges;
pub use comment::TaskComment;
pub use error::TaskDomainError;
pub use input::{NewTask, TaskPatch};
pub use progress::Progress;
pub use status::{TaskPriority, TaskStatus};
pub use task::{Task, TaskOrigin};
