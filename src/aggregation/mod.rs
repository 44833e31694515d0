//! Aggregation engine.
//!
//! Produces read-only derived views over the task and user collections:
//! dashboard counters, team statistics, and the per-day progress series.
//! Nothing here mutates state; every view is a function of a snapshot and
//! the current time.

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
