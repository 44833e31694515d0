//! Staff roles.

use crate::schema::ParseValueError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// School administration.
    Administrator,
    /// Management staff.
    Management,
    /// Teaching staff.
    Educator,
    /// Support staff.
    SupportStaff,
}

impl UserRole {
    /// Every role.
    pub const ALL: [Self; 4] = [
        Self::Administrator,
        Self::Management,
        Self::Educator,
        Self::SupportStaff,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Administrator => "administrator",
            Self::Management => "management",
            Self::Educator => "educator",
            Self::SupportStaff => "support_staff",
        }
    }

    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Administrator => "Administrator",
            Self::Management => "Management",
            Self::Educator => "Educator",
            Self::SupportStaff => "Support Staff",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<&str> for UserRole {
    type Error = ParseValueError;

    /// Accepts both storage (`support_staff`) and label (`Support Staff`)
    /// forms, case-insensitively.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "administrator" => Ok(Self::Administrator),
            "management" => Ok(Self::Management),
            "educator" => Ok(Self::Educator),
            "support_staff" => Ok(Self::SupportStaff),
            _ => Err(ParseValueError::new("role", value)),
        }
    }
}
