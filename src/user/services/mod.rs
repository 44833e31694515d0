//! Orchestration services for the user directory.

mod directory;

pub use directory::{UserDirectoryError, UserDirectoryResult, UserDirectoryService};
