//! Error types for task domain rules.

use super::TaskStatus;
use crate::schema::TaskId;
use thiserror::Error;

/// Errors returned while mutating a task aggregate.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The status state machine rejected the move.
    #[error("invalid status transition for task {task_id}: {from} -> {to}")]
    InvalidTransition {
        /// The task being updated.
        task_id: TaskId,
        /// Current status.
        from: TaskStatus,
        /// Requested status.
        to: TaskStatus,
    },
}
