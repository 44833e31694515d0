//! Normalized email address.

use crate::schema::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower-cased email address with a non-empty local part and a dotted
/// domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    const MAX_LENGTH: usize = 254;

    /// Creates a validated address.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] on the `email` field when the address is
    /// malformed.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let normalized = raw.trim().to_ascii_lowercase();
        let is_valid = normalized.len() <= Self::MAX_LENGTH
            && !normalized.chars().any(char::is_whitespace)
            && normalized.split_once('@').is_some_and(|(local, domain)| {
                !local.is_empty()
                    && !domain.contains('@')
                    && domain.contains('.')
                    && !domain.starts_with('.')
                    && !domain.ends_with('.')
            });
        if !is_valid {
            return Err(ValidationError::single(
                "email",
                format!("'{raw}' is not a valid email address"),
            ));
        }
        Ok(Self(normalized))
    }

    /// Returns the address as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
