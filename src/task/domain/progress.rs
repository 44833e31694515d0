//! Bounded completion percentage.

use crate::schema::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Completion percentage in `0..=100`.
///
/// # Examples
///
/// ```
/// use campusdesk::task::domain::Progress;
///
/// let progress = Progress::new(40).expect("in range");
/// assert_eq!(progress.value(), 40);
/// assert!(Progress::new(101).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Progress(u8);

impl Progress {
    /// No work done.
    pub const NONE: Self = Self(0);
    /// All work done.
    pub const COMPLETE: Self = Self(100);

    /// Creates a validated progress value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] on the `progress` field when `value`
    /// exceeds 100.
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::single(
                "progress",
                format!("must be between 0 and 100, got {value}"),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the percentage.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Progress {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Progress> for u8 {
    fn from(progress: Progress) -> Self {
        progress.0
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
