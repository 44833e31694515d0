//! In-memory user repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::schema::UserId;
use crate::user::{
    domain::{EmailAddress, User},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};

/// Thread-safe in-memory user repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    state: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl ToString) -> UserRepositoryError {
    UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

fn email_taken(users: &HashMap<UserId, User>, candidate: &User) -> bool {
    users
        .values()
        .any(|user| user.id() != candidate.id() && user.email() == candidate.email())
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn store(&self, user: &User) -> UserRepositoryResult<()> {
        let mut users = self.state.write().map_err(poisoned)?;
        if users.contains_key(&user.id()) {
            return Err(UserRepositoryError::DuplicateUser(user.id()));
        }
        if email_taken(&users, user) {
            return Err(UserRepositoryError::DuplicateEmail(user.email().clone()));
        }
        users.insert(user.id(), user.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> UserRepositoryResult<()> {
        let mut users = self.state.write().map_err(poisoned)?;
        if !users.contains_key(&user.id()) {
            return Err(UserRepositoryError::NotFound(user.id()));
        }
        if email_taken(&users, user) {
            return Err(UserRepositoryError::DuplicateEmail(user.email().clone()));
        }
        users.insert(user.id(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>> {
        let users = self.state.read().map_err(poisoned)?;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> UserRepositoryResult<Option<User>> {
        let users = self.state.read().map_err(poisoned)?;
        Ok(users.values().find(|user| user.email() == email).cloned())
    }

    async fn list_all(&self) -> UserRepositoryResult<Vec<User>> {
        let users = self.state.read().map_err(poisoned)?;
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by(|left, right| {
            (left.last_name(), left.first_name(), left.id())
                .cmp(&(right.last_name(), right.first_name(), right.id()))
        });
        Ok(all)
    }
}
