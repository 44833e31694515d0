//! Port contracts for task lifecycle management.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod comment;
pub mod repository;

pub use comment::{TaskCommentRepository, TaskCommentRepositoryError, TaskCommentRepositoryResult};
pub use repository::{TaskFilter, TaskRepository, TaskRepositoryError, TaskRepositoryResult};
