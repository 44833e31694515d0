//! Length and count ceilings applied by entity validators.

use serde::{Deserialize, Serialize};

/// Configuration for schema validation limits.
///
/// # Examples
///
/// ```
/// use campusdesk::schema::SchemaLimits;
///
/// let limits = SchemaLimits::default();
/// assert_eq!(limits.max_title_length, 200);
///
/// let strict = SchemaLimits::strict();
/// assert!(strict.max_title_length < limits.max_title_length);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaLimits {
    /// Maximum title length in characters (tasks, suggestions, events).
    pub max_title_length: usize,
    /// Maximum description length in characters.
    pub max_description_length: usize,
    /// Maximum number of tags on a task.
    pub max_tags: usize,
    /// Maximum length of a single tag.
    pub max_tag_length: usize,
    /// Maximum number of attachment references on a task.
    pub max_attachments: usize,
    /// Maximum comment length in characters.
    pub max_comment_length: usize,
}

impl Default for SchemaLimits {
    fn default() -> Self {
        Self {
            max_title_length: 200,
            max_description_length: 5_000,
            max_tags: 20,
            max_tag_length: 50,
            max_attachments: 20,
            max_comment_length: 2_000,
        }
    }
}

impl SchemaLimits {
    /// Creates a strict configuration with reduced limits.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            max_title_length: 100,
            max_description_length: 1_000,
            max_tags: 5,
            max_tag_length: 30,
            max_attachments: 5,
            max_comment_length: 500,
        }
    }
}
