//! In-memory adapters - used when no database is configured.

mod role_directory;
mod tip_store;

pub use role_directory::InMemoryRoleDirectory;
pub use tip_store::InMemoryTipStore;
