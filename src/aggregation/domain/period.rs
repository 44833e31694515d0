//! Progress chart periods.

use crate::schema::ValidationError;
use serde::{Deserialize, Serialize};

/// Supported trailing windows for the progress series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum ProgressPeriod {
    /// Seven days.
    Week,
    /// Thirty days.
    Month,
    /// Ninety days.
    Quarter,
}

impl ProgressPeriod {
    /// Number of calendar days covered, today included.
    #[must_use]
    pub const fn days(self) -> u32 {
        match self {
            Self::Week => 7,
            Self::Month => 30,
            Self::Quarter => 90,
        }
    }
}

impl TryFrom<u32> for ProgressPeriod {
    type Error = ValidationError;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        match days {
            7 => Ok(Self::Week),
            30 => Ok(Self::Month),
            90 => Ok(Self::Quarter),
            other => Err(ValidationError::single(
                "period",
                format!("unsupported period of {other} days; expected 7, 30, or 90"),
            )),
        }
    }
}

impl From<ProgressPeriod> for u32 {
    fn from(period: ProgressPeriod) -> Self {
        period.days()
    }
}
