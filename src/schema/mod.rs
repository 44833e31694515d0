//! Domain schema shared by every bounded context.
//!
//! Holds the opaque identifier newtypes, the field-level
//! [`ValidationError`] raised at the input boundary, and the
//! [`SchemaLimits`] configuration that bounds free-text fields. Entity
//! shapes live in each context's `domain` module and validate themselves
//! against these limits before any lifecycle logic runs.

mod error;
mod ids;
mod limits;

pub use error::{FieldIssue, FieldIssues, ParseValueError, ValidationError};
pub use ids::{
    ActivityId, CalendarEventId, CommentId, SettingId, SuggestionId, TaskId, UserId,
};
pub use limits::SchemaLimits;
