//! Suggestion lifecycle.
//!
//! AI suggestions arrive from an external recommendation generator and are
//! recorded as `pending`. A recipient may accept one, which materializes a
//! task through the task lifecycle service, or dismiss it. Both outcomes are
//! terminal.
//!
//! Acceptance spans two records. The suggestion is claimed with a
//! compare-and-set on its status before the task is stored, and the claim is
//! released again if storing the task fails, so a suggestion never ends up
//! `accepted` without its task.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
