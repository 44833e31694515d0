//! Operational settings.
//!
//! A flat key-value store for toggles such as notification switches or
//! term dates. Keys are unique; writing an existing key replaces its value.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
