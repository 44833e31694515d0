//! Port contracts for the user directory.

mod repository;

pub use repository::{UserRepository, UserRepositoryError, UserRepositoryResult};
