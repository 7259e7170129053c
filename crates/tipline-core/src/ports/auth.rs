//! Identity resolution port.

use async_trait::async_trait;

use crate::domain::Identity;

/// Resolves the current caller from the credentials presented with a request.
///
/// Login itself lives outside this service; implementations only verify
/// what the identity provider issued.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// Resolve credentials (e.g. a bearer token) into an identity.
    ///
    /// `None` means the caller presented nothing and yields
    /// [`AuthError::MissingAuth`].
    async fn resolve(&self, credentials: Option<&str>) -> Result<Identity, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Missing authorization credentials")]
    MissingAuth,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Identity provider error: {0}")]
    Backend(String),
}

impl AuthError {
    /// True when no identity could be established from the credentials,
    /// as opposed to the provider itself failing.
    pub fn is_unauthenticated(&self) -> bool {
        !matches!(self, AuthError::Backend(_))
    }
}
