//! School calendar events.
//!
//! Events are independent of tasks; task due dates may be shown alongside
//! them but no link is enforced.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
