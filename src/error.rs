//! Error taxonomy shared by every service in the crate.
//!
//! Each service error exposes a `kind()` mapping onto [`ErrorKind`], so a
//! transport layer can translate failures without matching every variant.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse classification of a service failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Malformed or out-of-range input. Nothing was applied.
    Validation,
    /// A referenced identifier does not exist.
    NotFound,
    /// A lifecycle state machine rejected the requested transition.
    InvalidTransition,
    /// An optimistic-concurrency check or uniqueness constraint failed.
    Conflict,
    /// The store or another collaborator failed.
    Internal,
}

impl ErrorKind {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::NotFound => "not_found",
            Self::InvalidTransition => "invalid_transition",
            Self::Conflict => "conflict",
            Self::Internal => "internal",
        }
    }

    /// Returns the HTTP status code conventionally used for this kind.
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::Validation => 400,
            Self::NotFound => 404,
            Self::InvalidTransition | Self::Conflict => 409,
            Self::Internal => 500,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
