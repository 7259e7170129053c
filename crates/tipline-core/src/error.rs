//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

/// Domain errors - business logic failures surfaced to views.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Write failed: {0}")]
    Write(String),

    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: Uuid },

    #[error("Authentication required")]
    Unauthenticated,

    #[error("Access denied: admin privileges required")]
    Denied,

    #[error("Deletion must be confirmed")]
    ConfirmationRequired,

    #[error("No tip is being edited")]
    NoEditInProgress,
}

impl DomainError {
    /// Whether the user may retry the triggering action from the same view.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            DomainError::Query(_) | DomainError::Write(_) | DomainError::NotFound { .. }
        )
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Write failed: {0}")]
    Write(String),

    #[error("Entity not found")]
    NotFound,
}

impl RepoError {
    /// Lift into a [`DomainError`], attaching the identity of the missing entity.
    pub fn into_domain(self, entity_type: &'static str, id: Uuid) -> DomainError {
        match self {
            RepoError::Query(msg) => DomainError::Query(msg),
            RepoError::Write(msg) => DomainError::Write(msg),
            RepoError::NotFound => DomainError::NotFound { entity_type, id },
        }
    }
}
