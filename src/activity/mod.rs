//! Append-only activity log.
//!
//! Every mutation performed by the task and suggestion services is recorded
//! here as an [`domain::Activity`] entry. The log exposes no update or
//! delete operation; feeds read it most-recent-first.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The recording service in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
