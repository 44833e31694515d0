//! User directory.
//!
//! Provisions accounts, applies admin edits, and toggles the soft
//! `is_active` flag. Users are never deleted. The aggregation engine reads
//! this directory for team statistics.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
