//! Step definitions for suggestion lifecycle scenarios.

pub mod world;

mod given;
mod then;
mod when;
