//! In-memory settings repository.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::settings::{
    domain::{SettingKey, SystemSetting},
    ports::{SettingsRepository, SettingsRepositoryError, SettingsRepositoryResult},
};

/// Thread-safe in-memory settings repository keyed by setting key.
#[derive(Debug, Clone, Default)]
pub struct InMemorySettingsRepository {
    state: Arc<RwLock<BTreeMap<SettingKey, SystemSetting>>>,
}

impl InMemorySettingsRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl ToString) -> SettingsRepositoryError {
    SettingsRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl SettingsRepository for InMemorySettingsRepository {
    async fn upsert(&self, setting: &SystemSetting) -> SettingsRepositoryResult<SystemSetting> {
        let mut settings = self.state.write().map_err(poisoned)?;
        let stored = settings.get(setting.key()).map_or_else(
            || setting.clone(),
            |existing| setting.clone().with_id(existing.id()),
        );
        settings.insert(stored.key().clone(), stored.clone());
        Ok(stored)
    }

    async fn find_by_key(&self, key: &SettingKey) -> SettingsRepositoryResult<Option<SystemSetting>> {
        let settings = self.state.read().map_err(poisoned)?;
        Ok(settings.get(key).cloned())
    }

    async fn list(&self, category: Option<&str>) -> SettingsRepositoryResult<Vec<SystemSetting>> {
        let settings = self.state.read().map_err(poisoned)?;
        Ok(settings
            .values()
            .filter(|setting| category.is_none_or(|wanted| setting.category() == wanted))
            .cloned()
            .collect())
    }
}
