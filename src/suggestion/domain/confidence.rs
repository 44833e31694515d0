//! Confidence score attached by the recommendation generator.

use crate::schema::ValidationError;
use serde::{Deserialize, Serialize};

/// Score in `[0, 1]`. Stored as supplied and never recomputed.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Confidence(f64);

impl Confidence {
    /// Creates a confidence score.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] on the `confidence` field when the value
    /// is outside `[0, 1]` or not a number.
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::single(
                "confidence",
                format!("must be between 0 and 1, got {value}"),
            ))
        }
    }

    /// Returns the raw score.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Confidence {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(confidence: Confidence) -> Self {
        confidence.0
    }
}
