//! Identifier newtypes for every persisted entity.
//!
//! Each identifier wraps a UUID so that, for example, a task identifier can
//! never be passed where a user identifier is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! uuid_identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier.
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates an identifier from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the wrapped UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl AsRef<Uuid> for $name {
            fn as_ref(&self) -> &Uuid {
                &self.0
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

uuid_identifier!(
    /// Unique identifier for a user account.
    UserId
);

uuid_identifier!(
    /// Unique identifier for a task.
    TaskId
);

uuid_identifier!(
    /// Unique identifier for a comment on a task.
    CommentId
);

uuid_identifier!(
    /// Unique identifier for an AI work suggestion.
    SuggestionId
);

uuid_identifier!(
    /// Unique identifier for an activity log entry.
    ActivityId
);

uuid_identifier!(
    /// Unique identifier for a calendar event.
    CalendarEventId
);

uuid_identifier!(
    /// Unique identifier for a system setting record.
    SettingId
);
