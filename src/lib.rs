//! Campusdesk: task and suggestion core for a school-operations dashboard.
//!
//! The crate holds the domain model behind the dashboard: staff create and
//! assign tasks, the core enforces the task status lifecycle, keeps an
//! append-only activity trail, derives progress statistics on demand, and
//! manages AI-generated work suggestions through accept/dismiss
//! transitions.
//!
//! # Architecture
//!
//! Campusdesk follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence and delivery
//! - **Adapters**: Concrete implementations of ports (in-memory stores,
//!   notification channels)
//!
//! # Modules
//!
//! - [`schema`]: Identifiers, validation errors, and schema limits
//! - [`task`]: Task lifecycle management and task comments
//! - [`activity`]: Append-only activity log
//! - [`aggregation`]: Dashboard, team, and progress-series statistics
//! - [`suggestion`]: AI suggestion lifecycle
//! - [`user`]: User directory and soft deactivation
//! - [`notification`]: Notification dispatch port and templates
//! - [`calendar`]: Calendar events
//! - [`settings`]: System settings key-value store

pub mod activity;
pub mod aggregation;
pub mod calendar;
pub mod clock;
pub mod error;
pub mod notification;
pub mod schema;
pub mod settings;
pub mod suggestion;
pub mod task;
pub mod user;
