//! Identity resolution implementations.

mod jwt;

pub use jwt::{JwtConfig, JwtIdentityResolver};
