//! Settings service.

use crate::error::ErrorKind;
use crate::schema::{UserId, ValidationError};
use crate::settings::{
    domain::{SettingKey, SystemSetting},
    ports::{SettingsRepository, SettingsRepositoryError},
};
use mockable::Clock;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised by [`SettingsService`].
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// No setting exists under the key.
    #[error("setting not found: {0}")]
    NotFound(SettingKey),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] SettingsRepositoryError),
}

impl SettingsError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Repository(_) => ErrorKind::Internal,
        }
    }
}

/// Result type for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Settings service.
#[derive(Clone)]
pub struct SettingsService<R, C>
where
    R: SettingsRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> SettingsService<R, C>
where
    R: SettingsRepository,
    C: Clock + Send + Sync,
{
    /// Creates a settings service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Writes `value` under `key`, creating the setting if needed.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Validation`] for a malformed key or blank
    /// category.
    pub async fn put_setting(
        &self,
        key: &str,
        value: Value,
        category: &str,
        actor: UserId,
    ) -> SettingsResult<SystemSetting> {
        let setting_key = SettingKey::new(key)?;
        let setting = match self.repository.find_by_key(&setting_key).await? {
            Some(mut existing) => {
                existing.replace(value, category, actor, &*self.clock)?;
                existing
            }
            None => SystemSetting::create(setting_key, value, category, actor, &*self.clock)?,
        };
        let stored = self.repository.upsert(&setting).await?;
        tracing::info!(key = %stored.key(), %actor, "setting written");
        Ok(stored)
    }

    /// Returns the setting stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::NotFound`] when nothing is stored under the
    /// key.
    pub async fn get_setting(&self, key: &str) -> SettingsResult<SystemSetting> {
        let setting_key = SettingKey::new(key)?;
        self.repository
            .find_by_key(&setting_key)
            .await?
            .ok_or(SettingsError::NotFound(setting_key))
    }

    /// Lists settings ordered by key, optionally within one category.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Repository`] when the lookup fails.
    pub async fn list_settings(&self, category: Option<&str>) -> SettingsResult<Vec<SystemSetting>> {
        Ok(self.repository.list(category).await?)
    }
}
