//! Adapter implementations for suggestion persistence.

pub mod memory;
