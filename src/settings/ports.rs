//! Repository port for settings.

use crate::settings::domain::{SettingKey, SystemSetting};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for settings repository operations.
pub type SettingsRepositoryResult<T> = Result<T, SettingsRepositoryError>;

/// Settings persistence contract.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Inserts or replaces the setting stored under its key and returns it as
    /// stored.
    ///
    /// A replacement keeps the identifier of the setting it overwrites, so
    /// concurrent first writes to one key settle on a single identity.
    async fn upsert(&self, setting: &SystemSetting) -> SettingsRepositoryResult<SystemSetting>;

    /// Finds a setting by key.
    async fn find_by_key(&self, key: &SettingKey) -> SettingsRepositoryResult<Option<SystemSetting>>;

    /// Returns settings ordered by key, optionally limited to one category.
    async fn list(&self, category: Option<&str>) -> SettingsRepositoryResult<Vec<SystemSetting>>;
}

/// Errors returned by settings repository implementations.
#[derive(Debug, Clone, Error)]
pub enum SettingsRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl SettingsRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
