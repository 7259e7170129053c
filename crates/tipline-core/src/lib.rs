//! # Tipline Core
//!
//! The domain layer of the Tipline service.
//! This crate contains the tip lifecycle rules (feed selection, pagination,
//! admin authorization and CRUD) with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use error::DomainError;
