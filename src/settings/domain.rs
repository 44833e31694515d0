//! Setting record and key validation.

use crate::schema::{FieldIssues, SettingId, UserId, ValidationError};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

const MAX_KEY_LENGTH: usize = 100;
const MAX_CATEGORY_LENGTH: usize = 50;

/// Setting key made of lower-case ASCII letters, digits, `_`, and `.`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SettingKey(String);

impl SettingKey {
    /// Creates a validated key.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] on the `key` field when the key is empty,
    /// too long, or uses other characters.
    ///
    /// ```
    /// use campusdesk::settings::domain::SettingKey;
    ///
    /// assert!(SettingKey::new("notifications.email_enabled").is_ok());
    /// assert!(SettingKey::new("Notifications Enabled").is_err());
    /// ```
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let key = value.into();
        let is_valid = !key.is_empty()
            && key.len() <= MAX_KEY_LENGTH
            && key
                .chars()
                .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_' || ch == '.');
        if is_valid {
            Ok(Self(key))
        } else {
            Err(ValidationError::single(
                "key",
                format!("'{key}' must be 1-{MAX_KEY_LENGTH} characters of [a-z0-9_.]"),
            ))
        }
    }

    /// Returns the key as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SettingKey {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SettingKey> for String {
    fn from(key: SettingKey) -> Self {
        key.0
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stored setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemSetting {
    id: SettingId,
    key: SettingKey,
    value: Value,
    category: String,
    updated_by: UserId,
    updated_at: DateTime<Utc>,
}

impl SystemSetting {
    /// Builds a new setting.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the category is blank or too long.
    pub fn create(
        key: SettingKey,
        value: Value,
        category: &str,
        updated_by: UserId,
        clock: &impl Clock,
    ) -> Result<Self, ValidationError> {
        validate_category(category)?;
        Ok(Self {
            id: SettingId::new(),
            key,
            value,
            category: category.trim().to_owned(),
            updated_by,
            updated_at: clock.utc(),
        })
    }

    /// Replaces the value and category, keeping identity.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the category is blank or too long.
    pub fn replace(
        &mut self,
        value: Value,
        category: &str,
        updated_by: UserId,
        clock: &impl Clock,
    ) -> Result<(), ValidationError> {
        validate_category(category)?;
        self.value = value;
        self.category = category.trim().to_owned();
        self.updated_by = updated_by;
        self.updated_at = clock.utc();
        Ok(())
    }

    /// Carries over the identifier of the setting already stored under the
    /// same key.
    #[must_use]
    pub(crate) const fn with_id(mut self, id: SettingId) -> Self {
        self.id = id;
        self
    }

    /// Returns the setting identifier.
    #[must_use]
    pub const fn id(&self) -> SettingId {
        self.id
    }

    /// Returns the key.
    #[must_use]
    pub const fn key(&self) -> &SettingKey {
        &self.key
    }

    /// Returns the value.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Returns the category.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns who last wrote the setting.
    #[must_use]
    pub const fn updated_by(&self) -> UserId {
        self.updated_by
    }

    /// Returns when the setting was last written.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

fn validate_category(category: &str) -> Result<(), ValidationError> {
    let mut issues = FieldIssues::new();
    issues.require_text("category", category, MAX_CATEGORY_LENGTH);
    issues.finish()
}
