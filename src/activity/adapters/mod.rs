//! Adapter implementations for activity ports.

pub mod memory;
