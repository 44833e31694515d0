//! Calendar event record.

use crate::schema::{CalendarEventId, FieldIssues, ParseValueError, SchemaLimits, UserId, ValidationError};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Kind of calendar entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarEventKind {
    /// A scheduled meeting.
    Meeting,
    /// A submission or completion deadline.
    Deadline,
    /// A general school event.
    #[default]
    Event,
    /// A personal reminder.
    Reminder,
}

impl CalendarEventKind {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Meeting => "meeting",
            Self::Deadline => "deadline",
            Self::Event => "event",
            Self::Reminder => "reminder",
        }
    }
}

impl fmt::Display for CalendarEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for CalendarEventKind {
    type Error = ParseValueError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "meeting" => Ok(Self::Meeting),
            "deadline" => Ok(Self::Deadline),
            "event" => Ok(Self::Event),
            "reminder" => Ok(Self::Reminder),
            _ => Err(ParseValueError::new("event type", value)),
        }
    }
}

/// Payload for creating a calendar event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCalendarEvent {
    title: String,
    description: Option<String>,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    all_day: bool,
    kind: CalendarEventKind,
    attendees: Vec<UserId>,
    created_by: UserId,
}

impl NewCalendarEvent {
    /// Creates a payload spanning `start_date` to `end_date`.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        created_by: UserId,
    ) -> Self {
        Self {
            title: title.into(),
            description: None,
            start_date,
            end_date,
            all_day: false,
            kind: CalendarEventKind::default(),
            attendees: Vec::new(),
            created_by,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks the event as lasting all day.
    #[must_use]
    pub const fn all_day(mut self) -> Self {
        self.all_day = true;
        self
    }

    /// Sets the event kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: CalendarEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the attendees.
    #[must_use]
    pub fn with_attendees(mut self, attendees: impl IntoIterator<Item = UserId>) -> Self {
        self.attendees = attendees.into_iter().collect();
        self
    }
}

/// A calendar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    id: CalendarEventId,
    title: String,
    description: Option<String>,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    all_day: bool,
    #[serde(rename = "type")]
    kind: CalendarEventKind,
    attendees: BTreeSet<UserId>,
    created_by: UserId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CalendarEvent {
    /// Validates a payload and builds the event.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the title is blank or too long, or
    /// when the event ends before it starts.
    pub fn create(
        input: NewCalendarEvent,
        limits: &SchemaLimits,
        clock: &impl Clock,
    ) -> Result<Self, ValidationError> {
        let mut issues = FieldIssues::new();
        issues.require_text("title", &input.title, limits.max_title_length);
        issues.check_optional_text(
            "description",
            input.description.as_deref(),
            limits.max_description_length,
        );
        if input.end_date < input.start_date {
            issues.push("endDate", "must not be earlier than startDate");
        }
        issues.finish()?;

        let timestamp = clock.utc();
        Ok(Self {
            id: CalendarEventId::new(),
            title: input.title.trim().to_owned(),
            description: input.description,
            start_date: input.start_date,
            end_date: input.end_date,
            all_day: input.all_day,
            kind: input.kind,
            attendees: input.attendees.into_iter().collect(),
            created_by: input.created_by,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Returns the event identifier.
    #[must_use]
    pub const fn id(&self) -> CalendarEventId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the start instant.
    #[must_use]
    pub const fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    /// Returns the end instant.
    #[must_use]
    pub const fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }

    /// Returns `true` for all-day events.
    #[must_use]
    pub const fn is_all_day(&self) -> bool {
        self.all_day
    }

    /// Returns the event kind.
    #[must_use]
    pub const fn kind(&self) -> CalendarEventKind {
        self.kind
    }

    /// Returns the attendees.
    #[must_use]
    pub const fn attendees(&self) -> &BTreeSet<UserId> {
        &self.attendees
    }

    /// Returns the creator.
    #[must_use]
    pub const fn created_by(&self) -> UserId {
        self.created_by
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns `true` when the event is attended or organised by `user`.
    #[must_use]
    pub fn involves(&self, user: UserId) -> bool {
        self.created_by == user || self.attendees.contains(&user)
    }

    /// Returns `true` when the event overlaps the closed range
    /// `[from, to]`.
    #[must_use]
    pub fn overlaps(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> bool {
        self.start_date <= to && self.end_date >= from
    }
}
