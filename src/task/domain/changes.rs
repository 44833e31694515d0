//! Field-level diff produced by a task update.

use super::task::to_value;
use crate::schema::UserId;
use serde::Serialize;
use serde_json::{Map, Value, json};
use std::collections::BTreeSet;

/// Summary of the fields a patch actually changed.
///
/// Fields whose value did not change are omitted, so an empty summary means
/// the update only moved the timestamp.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskChanges {
    fields: Map<String, Value>,
    added_assignees: Vec<UserId>,
    removed_assignees: Vec<UserId>,
}

impl TaskChanges {
    pub(crate) fn record<T>(&mut self, field: &str, before: &T, after: &T)
    where
        T: Serialize + PartialEq,
    {
        if before != after {
            self.fields.insert(
                field.to_owned(),
                json!({ "from": to_value(before), "to": to_value(after) }),
            );
        }
    }

    pub(crate) fn record_assignees(&mut self, before: &BTreeSet<UserId>, after: &BTreeSet<UserId>) {
        self.added_assignees = after.difference(before).copied().collect();
        self.removed_assignees = before.difference(after).copied().collect();
        self.record("assignedTo", before, after);
    }

    /// Returns `true` when no field changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns `true` when `field` changed.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns the names of the changed fields in sorted order.
    #[must_use]
    pub fn changed_fields(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).collect()
    }

    /// Returns users newly added to the assignee set.
    #[must_use]
    pub fn added_assignees(&self) -> &[UserId] {
        &self.added_assignees
    }

    /// Returns users removed from the assignee set.
    #[must_use]
    pub fn removed_assignees(&self) -> &[UserId] {
        &self.removed_assignees
    }

    /// Returns the `{field: {from, to}}` mapping stored in activity metadata.
    #[must_use]
    pub fn to_metadata(&self) -> Value {
        Value::Object(self.fields.clone())
    }
}
