//! Activity entries and feed filters.

use crate::schema::{ActivityId, FieldIssues, UserId, ValidationError};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use uuid::Uuid;

/// Free-form event tag such as `task_created`.
///
/// Tags are lowercase ASCII letters, digits, and underscores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityKind(String);

impl ActivityKind {
    /// A task was created.
    pub const TASK_CREATED: &'static str = "task_created";
    /// A task was updated.
    pub const TASK_UPDATED: &'static str = "task_updated";
    /// A comment was added to a task.
    pub const COMMENT_ADDED: &'static str = "comment_added";
    /// A comment was edited by its author.
    pub const COMMENT_EDITED: &'static str = "comment_edited";
    /// A suggestion was accepted and turned into a task.
    pub const SUGGESTION_ACCEPTED: &'static str = "suggestion_accepted";
    /// A suggestion was dismissed.
    pub const SUGGESTION_DISMISSED: &'static str = "suggestion_dismissed";

    /// Creates a validated activity tag.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] on the `type` field when the tag is empty
    /// or contains characters outside `[a-z0-9_]`.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let normalized = raw.trim();
        let is_valid = !normalized.is_empty()
            && normalized
                .chars()
                .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_');
        if !is_valid {
            return Err(ValidationError::single(
                "type",
                format!("'{raw}' must be non-empty lowercase letters, digits, or underscores"),
            ));
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Creates a tag from one of the built-in constants.
    pub(crate) fn builtin(value: &'static str) -> Self {
        Self(value.to_owned())
    }

    /// Returns the tag as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One immutable entry in the activity log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Entry identifier.
    pub id: ActivityId,
    /// Event tag.
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    /// The acting user.
    pub user_id: UserId,
    /// The affected entity, if any.
    pub target_id: Option<Uuid>,
    /// Human-readable summary.
    pub description: String,
    /// Opaque structured detail.
    pub metadata: Map<String, Value>,
    /// When the entry was recorded.
    pub created_at: DateTime<Utc>,
}

/// Entry to be appended to the log.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityDraft {
    kind: ActivityKind,
    user_id: UserId,
    target_id: Option<Uuid>,
    description: String,
    metadata: Map<String, Value>,
}

impl ActivityDraft {
    /// Creates a draft for `kind` performed by `user_id`.
    #[must_use]
    pub fn new(kind: ActivityKind, user_id: UserId, description: impl Into<String>) -> Self {
        Self {
            kind,
            user_id,
            target_id: None,
            description: description.into(),
            metadata: Map::new(),
        }
    }

    /// Sets the affected entity.
    #[must_use]
    pub fn with_target(mut self, target_id: impl Into<Uuid>) -> Self {
        self.target_id = Some(target_id.into());
        self
    }

    /// Adds a metadata entry.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Returns the event tag.
    #[must_use]
    pub const fn kind(&self) -> &ActivityKind {
        &self.kind
    }

    /// Validates the draft and stamps it into an immutable entry.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] on the `description` field when it is
    /// blank.
    pub fn into_activity(self, clock: &impl Clock) -> Result<Activity, ValidationError> {
        let mut issues = FieldIssues::new();
        if self.description.trim().is_empty() {
            issues.push("description", "must not be empty");
        }
        issues.finish()?;
        Ok(Activity {
            id: ActivityId::new(),
            kind: self.kind,
            user_id: self.user_id,
            target_id: self.target_id,
            description: self.description,
            metadata: self.metadata,
            created_at: clock.utc(),
        })
    }
}

/// Selection applied when reading a feed.
///
/// All set criteria must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityFilter {
    kind: Option<ActivityKind>,
    user_id: Option<UserId>,
    target_id: Option<Uuid>,
    limit: Option<usize>,
}

impl ActivityFilter {
    /// Creates a filter that selects every entry.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Restricts the feed to one event tag.
    #[must_use]
    pub fn with_kind(mut self, kind: ActivityKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Restricts the feed to one acting user.
    #[must_use]
    pub const fn with_user(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Restricts the feed to one affected entity.
    #[must_use]
    pub fn with_target(mut self, target_id: impl Into<Uuid>) -> Self {
        self.target_id = Some(target_id.into());
        self
    }

    /// Caps the number of returned entries.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Returns the entry cap, if any.
    #[must_use]
    pub const fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Returns `true` when `activity` satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, activity: &Activity) -> bool {
        self.kind.as_ref().is_none_or(|kind| *kind == activity.kind)
            && self.user_id.is_none_or(|user| user == activity.user_id)
            && self
                .target_id
                .is_none_or(|target| activity.target_id == Some(target))
    }
}
