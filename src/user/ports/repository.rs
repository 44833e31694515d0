//! Repository port for user accounts.

use crate::schema::UserId;
use crate::user::domain::{EmailAddress, User};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user repository operations.
pub type UserRepositoryResult<T> = Result<T, UserRepositoryError>;

/// User persistence contract.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores a new account.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::DuplicateUser`] when the identifier
    /// exists and [`UserRepositoryError::DuplicateEmail`] when another account
    /// already owns the address.
    async fn store(&self, user: &User) -> UserRepositoryResult<()>;

    /// Replaces an existing account.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::NotFound`] when the account does not
    /// exist.
    async fn update(&self, user: &User) -> UserRepositoryResult<()>;

    /// Finds an account by identifier.
    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>>;

    /// Finds an account by normalized email address.
    async fn find_by_email(&self, email: &EmailAddress) -> UserRepositoryResult<Option<User>>;

    /// Returns every account ordered by last name, then first name.
    async fn list_all(&self) -> UserRepositoryResult<Vec<User>>;
}

/// Errors returned by user repository implementations.
#[derive(Debug, Clone, Error)]
pub enum UserRepositoryError {
    /// An account with the same identifier already exists.
    #[error("duplicate user identifier: {0}")]
    DuplicateUser(UserId),

    /// Another account already uses the email address.
    #[error("email address already registered: {0}")]
    DuplicateEmail(EmailAddress),

    /// The account was not found.
    #[error("user not found: {0}")]
    NotFound(UserId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
