//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod repository;

pub use auth::{AuthError, IdentityResolver};
pub use repository::{RoleDirectory, TipStore, has_capability};
