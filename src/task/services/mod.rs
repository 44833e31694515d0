//! Application services for task lifecycle orchestration.

mod comments;
mod lifecycle;

pub use comments::{TaskCommentError, TaskCommentResult, TaskCommentService};
pub use lifecycle::{
    TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService, UpdateTaskRequest,
};
