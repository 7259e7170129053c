//! SeaORM entities.

pub mod tip;
pub mod user_role;
