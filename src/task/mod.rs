//! Task lifecycle management.
//!
//! Creates tasks, applies validated patches under the status state machine
//! with optimistic concurrency, records every mutation in the activity log,
//! and announces assignments. Task comments live here too since they only
//! exist alongside a task. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
