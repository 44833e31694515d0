//! In-memory adapters for task and comment persistence.

mod comment;
mod task;

pub use comment::InMemoryTaskCommentRepository;
pub use task::InMemoryTaskRepository;
