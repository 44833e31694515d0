//! Account provisioning and maintenance.

use crate::error::ErrorKind;
use crate::schema::{UserId, ValidationError};
use crate::user::{
    domain::{EmailAddress, NewUser, User, UserPatch},
    ports::{UserRepository, UserRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised by [`UserDirectoryService`].
#[derive(Debug, Error)]
pub enum UserDirectoryError {
    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The account does not exist.
    #[error("user not found: {0}")]
    NotFound(UserId),

    /// The email address belongs to another account.
    #[error("email address already registered: {0}")]
    EmailTaken(EmailAddress),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(UserRepositoryError),
}

impl UserDirectoryError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::EmailTaken(_) => ErrorKind::Conflict,
            Self::Repository(_) => ErrorKind::Internal,
        }
    }
}

impl From<UserRepositoryError> for UserDirectoryError {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            UserRepositoryError::NotFound(id) => Self::NotFound(id),
            UserRepositoryError::DuplicateEmail(email) => Self::EmailTaken(email),
            other => Self::Repository(other),
        }
    }
}

/// Result type for user directory operations.
pub type UserDirectoryResult<T> = Result<T, UserDirectoryError>;

/// User directory service.
#[derive(Clone)]
pub struct UserDirectoryService<R, C>
where
    R: UserRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> UserDirectoryService<R, C>
where
    R: UserRepository,
    C: Clock + Send + Sync,
{
    /// Creates a directory service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Provisions an active account.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Validation`] for malformed input and
    /// [`UserDirectoryError::EmailTaken`] when the address is registered.
    pub async fn provision_user(&self, input: NewUser) -> UserDirectoryResult<User> {
        let user = User::provision(input, &*self.clock)?;
        if self.repository.find_by_email(user.email()).await?.is_some() {
            return Err(UserDirectoryError::EmailTaken(user.email().clone()));
        }
        self.repository.store(&user).await?;
        tracing::info!(user_id = %user.id(), role = %user.role(), "user provisioned");
        Ok(user)
    }

    /// Applies an admin edit.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::NotFound`] for an unknown account or
    /// [`UserDirectoryError::Validation`] for a malformed patch.
    pub async fn update_user(&self, id: UserId, patch: UserPatch) -> UserDirectoryResult<User> {
        let mut user = self.get_user(id).await?;
        user.apply(patch, &*self.clock)?;
        self.repository.update(&user).await?;
        tracing::info!(user_id = %id, "user updated");
        Ok(user)
    }

    /// Soft-deactivates an account.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::NotFound`] for an unknown account.
    pub async fn deactivate_user(&self, id: UserId) -> UserDirectoryResult<User> {
        self.set_active(id, false).await
    }

    /// Reactivates a deactivated account.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::NotFound`] for an unknown account.
    pub async fn reactivate_user(&self, id: UserId) -> UserDirectoryResult<User> {
        self.set_active(id, true).await
    }

    async fn set_active(&self, id: UserId, is_active: bool) -> UserDirectoryResult<User> {
        let mut user = self.get_user(id).await?;
        if user.is_active() == is_active {
            return Ok(user);
        }
        user.set_active(is_active, &*self.clock);
        self.repository.update(&user).await?;
        tracing::info!(user_id = %id, is_active, "user activation changed");
        Ok(user)
    }

    /// Returns an account by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::NotFound`] for an unknown account.
    pub async fn get_user(&self, id: UserId) -> UserDirectoryResult<User> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserDirectoryError::NotFound(id))
    }

    /// Lists accounts ordered by name, optionally only the active ones.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Repository`] when the lookup fails.
    pub async fn list_users(&self, active_only: bool) -> UserDirectoryResult<Vec<User>> {
        let users = self.repository.list_all().await?;
        Ok(users
            .into_iter()
            .filter(|user| !active_only || user.is_active())
            .collect())
    }
}
