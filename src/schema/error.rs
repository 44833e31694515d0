//! Field-level validation errors raised at the schema boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One rejected input field and the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    /// Name of the offending field, in wire casing (for example `assignedTo`).
    pub field: String,
    /// Human-readable reason.
    pub reason: String,
}

impl FieldIssue {
    /// Creates a field issue.
    #[must_use]
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Input rejected before reaching any lifecycle logic.
///
/// Carries every issue found in the input rather than only the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed: {}", format_issues(.issues))]
pub struct ValidationError {
    issues: Vec<FieldIssue>,
}

fn format_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("{}: {}", issue.field, issue.reason))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Creates an error carrying a single field issue.
    #[must_use]
    pub fn single(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            issues: vec![FieldIssue::new(field, reason)],
        }
    }

    /// Returns every collected issue in discovery order.
    #[must_use]
    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    /// Returns `true` when one of the issues concerns `field`.
    #[must_use]
    pub fn has_issue_for(&self, field: &str) -> bool {
        self.issues.iter().any(|issue| issue.field == field)
    }
}

/// Accumulator used by entity validators.
///
/// Validators push every problem they find and call [`FieldIssues::finish`]
/// once, so a caller sees the complete list of rejected fields.
#[derive(Debug, Clone, Default)]
pub struct FieldIssues {
    issues: Vec<FieldIssue>,
}

impl FieldIssues {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an issue.
    pub fn push(&mut self, field: impl Into<String>, reason: impl Into<String>) {
        self.issues.push(FieldIssue::new(field, reason));
    }

    /// Requires `value` to be non-blank and at most `max_chars` characters.
    pub fn require_text(&mut self, field: &str, value: &str, max_chars: usize) {
        if value.trim().is_empty() {
            self.push(field, "must not be empty");
        } else {
            self.check_max_chars(field, value, max_chars);
        }
    }

    /// Checks an optional free-text value against `max_chars`.
    pub fn check_optional_text(&mut self, field: &str, value: Option<&str>, max_chars: usize) {
        if let Some(text) = value {
            self.check_max_chars(field, text, max_chars);
        }
    }

    /// Checks a character ceiling.
    pub fn check_max_chars(&mut self, field: &str, value: &str, max_chars: usize) {
        let length = value.chars().count();
        if length > max_chars {
            self.push(
                field,
                format!("must be at most {max_chars} characters, got {length}"),
            );
        }
    }

    /// Requires an optional number to be finite and non-negative.
    pub fn check_non_negative(&mut self, field: &str, value: Option<f64>) {
        if let Some(number) = value
            && (!number.is_finite() || number < 0.0)
        {
            self.push(field, format!("must be a non-negative number, got {number}"));
        }
    }

    /// Returns `true` when no issue has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Converts the accumulator into a result.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] carrying every recorded issue when at
    /// least one was pushed.
    pub fn finish(self) -> Result<(), ValidationError> {
        if self.issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                issues: self.issues,
            })
        }
    }
}

/// Error returned while parsing an enumerated value from its string form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind}: {value}")]
pub struct ParseValueError {
    /// Name of the enumeration being parsed.
    pub kind: &'static str,
    /// Rejected input.
    pub value: String,
}

impl ParseValueError {
    /// Creates a parse error for `kind`.
    #[must_use]
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

impl From<ParseValueError> for ValidationError {
    fn from(err: ParseValueError) -> Self {
        Self::single(err.kind, format!("unknown value '{}'", err.value))
    }
}
