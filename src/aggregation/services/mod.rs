//! Services that load snapshots and compute derived views.

mod engine;

pub use engine::{AggregationError, AggregationResult, AggregationService};
