//! # Tipline Infrastructure
//!
//! Concrete implementations of the ports defined in `tipline-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL tip store and role directory via SeaORM
//! - `auth` - JWT bearer-token identity resolution

pub mod database;
pub mod memory;

#[cfg(feature = "auth")]
pub mod auth;

// Re-exports - In-Memory
pub use memory::{InMemoryRoleDirectory, InMemoryTipStore};

#[cfg(feature = "postgres")]
pub use database::{DatabaseConnections, PostgresRoleDirectory, PostgresTipStore};

#[cfg(feature = "auth")]
pub use auth::{JwtConfig, JwtIdentityResolver};
