//! Domain model for user accounts.

mod email;
mod role;
mod user;

pub use email::EmailAddress;
pub use role::UserRole;
pub use user::{NewUser, User, UserPatch};
