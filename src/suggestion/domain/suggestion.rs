//! AI suggestion record and its status machine.

use super::{Confidence, SuggestionDomainError};
use crate::schema::{FieldIssues, ParseValueError, SchemaLimits, SuggestionId, UserId, ValidationError};
use crate::task::domain::TaskPriority;
use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

const MAX_CATEGORY_LENGTH: usize = 50;

/// Suggestion status. `Pending` is initial; the others are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionStatus {
    /// Awaiting a decision.
    Pending,
    /// Accepted and materialized as a task.
    Accepted,
    /// Dismissed by the recipient.
    Dismissed,
}

impl SuggestionStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Dismissed => "dismissed",
        }
    }

    /// Returns `true` for accepted and dismissed.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl fmt::Display for SuggestionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for SuggestionStatus {
    type Error = ParseValueError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "dismissed" => Ok(Self::Dismissed),
            _ => Err(ParseValueError::new("suggestion status", value)),
        }
    }
}

/// Payload produced by the recommendation generator.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSuggestion {
    user_id: UserId,
    title: String,
    description: String,
    reasoning: String,
    category: String,
    priority: TaskPriority,
    confidence: f64,
}

impl NewSuggestion {
    /// Creates a payload for `user_id`.
    #[must_use]
    pub fn new(
        user_id: UserId,
        title: impl Into<String>,
        category: impl Into<String>,
        confidence: f64,
    ) -> Self {
        Self {
            user_id,
            title: title.into(),
            description: String::new(),
            reasoning: String::new(),
            category: category.into(),
            priority: TaskPriority::default(),
            confidence,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the generator's reasoning.
    #[must_use]
    pub fn with_reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.reasoning = reasoning.into();
        self
    }

    /// Sets the suggested priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }
}

/// A recorded AI suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiSuggestion {
    id: SuggestionId,
    user_id: UserId,
    title: String,
    description: String,
    reasoning: String,
    #[serde(rename = "type")]
    category: String,
    priority: TaskPriority,
    confidence: Confidence,
    status: SuggestionStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AiSuggestion {
    /// Validates a payload and records it as pending.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] listing every rejected field.
    pub fn record(
        input: NewSuggestion,
        limits: &SchemaLimits,
        clock: &impl Clock,
    ) -> Result<Self, ValidationError> {
        let mut issues = FieldIssues::new();
        issues.require_text("title", &input.title, limits.max_title_length);
        issues.check_max_chars("description", &input.description, limits.max_description_length);
        issues.check_max_chars("reasoning", &input.reasoning, limits.max_description_length);
        issues.require_text("type", &input.category, MAX_CATEGORY_LENGTH);
        let confidence = match Confidence::new(input.confidence) {
            Ok(confidence) => Some(confidence),
            Err(err) => {
                for issue in err.issues() {
                    issues.push(issue.field.clone(), issue.reason.clone());
                }
                None
            }
        };
        issues.finish()?;
        let Some(score) = confidence else {
            return Err(ValidationError::single("confidence", "missing confidence"));
        };

        let timestamp = clock.utc();
        Ok(Self {
            id: SuggestionId::new(),
            user_id: input.user_id,
            title: input.title.trim().to_owned(),
            description: input.description,
            reasoning: input.reasoning,
            category: input.category.trim().to_owned(),
            priority: input.priority,
            confidence: score,
            status: SuggestionStatus::Pending,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Returns the suggestion identifier.
    #[must_use]
    pub const fn id(&self) -> SuggestionId {
        self.id
    }

    /// Returns the recipient.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the generator's reasoning.
    #[must_use]
    pub fn reasoning(&self) -> &str {
        &self.reasoning
    }

    /// Returns the category.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the suggested priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the confidence score.
    #[must_use]
    pub const fn confidence(&self) -> Confidence {
        self.confidence
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> SuggestionStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Marks a pending suggestion accepted.
    ///
    /// # Errors
    ///
    /// Returns [`SuggestionDomainError::InvalidTransition`] unless pending.
    pub fn accept(&mut self, clock: &impl Clock) -> Result<(), SuggestionDomainError> {
        self.resolve(SuggestionStatus::Accepted, clock)
    }

    /// Marks a pending suggestion dismissed.
    ///
    /// # Errors
    ///
    /// Returns [`SuggestionDomainError::InvalidTransition`] unless pending.
    pub fn dismiss(&mut self, clock: &impl Clock) -> Result<(), SuggestionDomainError> {
        self.resolve(SuggestionStatus::Dismissed, clock)
    }

    /// Releases an acceptance claim whose task could not be stored.
    pub(crate) fn reopen(&mut self, clock: &impl Clock) {
        self.status = SuggestionStatus::Pending;
        self.touch(clock);
    }

    fn resolve(
        &mut self,
        target: SuggestionStatus,
        clock: &impl Clock,
    ) -> Result<(), SuggestionDomainError> {
        if self.status.is_terminal() {
            return Err(SuggestionDomainError::InvalidTransition {
                suggestion_id: self.id,
                from: self.status,
                to: target,
            });
        }
        self.status = target;
        self.touch(clock);
        Ok(())
    }

    fn touch(&mut self, clock: &impl Clock) {
        let now = clock.utc();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + TimeDelta::microseconds(1)
        };
    }
}
