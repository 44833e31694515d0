//! User aggregate and its inbound payloads.

use super::{EmailAddress, UserRole};
use crate::schema::{FieldIssues, UserId, ValidationError};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

const MAX_NAME_LENGTH: usize = 100;

/// A staff account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    email: EmailAddress,
    first_name: String,
    last_name: String,
    role: UserRole,
    department: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Payload for provisioning an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    email: String,
    first_name: String,
    last_name: String,
    role: UserRole,
    department: Option<String>,
}

impl NewUser {
    /// Creates a payload with the required fields.
    #[must_use]
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        role: UserRole,
    ) -> Self {
        Self {
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            role,
            department: None,
        }
    }

    /// Sets the department.
    #[must_use]
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }
}

/// Admin edit of an existing account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    /// New first name.
    pub first_name: Option<String>,
    /// New last name.
    pub last_name: Option<String>,
    /// New role.
    pub role: Option<UserRole>,
    /// New department, or `Some(None)` to clear it.
    pub department: Option<Option<String>>,
}

impl UserPatch {
    /// Replaces the role.
    #[must_use]
    pub const fn with_role(mut self, role: UserRole) -> Self {
        self.role = Some(role);
        self
    }

    /// Replaces the department.
    #[must_use]
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(Some(department.into()));
        self
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut issues = FieldIssues::new();
        if let Some(first_name) = &self.first_name {
            issues.require_text("firstName", first_name, MAX_NAME_LENGTH);
        }
        if let Some(last_name) = &self.last_name {
            issues.require_text("lastName", last_name, MAX_NAME_LENGTH);
        }
        issues.finish()
    }
}

impl User {
    /// Provisions a new active account.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] listing every rejected field.
    pub fn provision(input: NewUser, clock: &impl Clock) -> Result<Self, ValidationError> {
        let mut issues = FieldIssues::new();
        let email = match EmailAddress::new(input.email) {
            Ok(email) => Some(email),
            Err(err) => {
                for issue in err.issues() {
                    issues.push(issue.field.clone(), issue.reason.clone());
                }
                None
            }
        };
        issues.require_text("firstName", &input.first_name, MAX_NAME_LENGTH);
        issues.require_text("lastName", &input.last_name, MAX_NAME_LENGTH);
        issues.check_optional_text("department", input.department.as_deref(), MAX_NAME_LENGTH);
        issues.finish()?;
        let Some(valid_email) = email else {
            return Err(ValidationError::single("email", "missing email address"));
        };

        let timestamp = clock.utc();
        Ok(Self {
            id: UserId::new(),
            email: valid_email,
            first_name: input.first_name.trim().to_owned(),
            last_name: input.last_name.trim().to_owned(),
            role: input.role,
            department: input.department,
            is_active: true,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns `"first last"`.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns the role.
    #[must_use]
    pub const fn role(&self) -> UserRole {
        self.role
    }

    /// Returns the department, if any.
    #[must_use]
    pub fn department(&self) -> Option<&str> {
        self.department.as_deref()
    }

    /// Returns `false` once the account has been deactivated.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    /// Returns the provisioning timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies an admin edit.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when a supplied name is blank or too long.
    pub fn apply(&mut self, patch: UserPatch, clock: &impl Clock) -> Result<(), ValidationError> {
        patch.validate()?;
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name.trim().to_owned();
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name.trim().to_owned();
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(department) = patch.department {
            self.department = department;
        }
        self.updated_at = clock.utc();
        Ok(())
    }

    /// Marks the account active or inactive.
    pub fn set_active(&mut self, is_active: bool, clock: &impl Clock) {
        self.is_active = is_active;
        self.updated_at = clock.utc();
    }
}
