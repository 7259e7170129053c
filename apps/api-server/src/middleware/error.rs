//! Error handling middleware - RFC 7807 compliant responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tipline_core::DomainError;
use tipline_shared::ErrorResponse;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Domain(err) => match err {
                DomainError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
                DomainError::Query(_) | DomainError::Write(_) => StatusCode::SERVICE_UNAVAILABLE,
                DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
                DomainError::Unauthenticated => StatusCode::UNAUTHORIZED,
                DomainError::Denied => StatusCode::FORBIDDEN,
                DomainError::ConfirmationRequired => StatusCode::PRECONDITION_REQUIRED,
                DomainError::NoEditInProgress => StatusCode::CONFLICT,
            },
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::Domain(err) => {
                let status = self.status_code();
                let response = match err {
                    DomainError::Unauthenticated => ErrorResponse::unauthorized()
                        .with_detail("Please sign in with a valid Bearer token."),
                    DomainError::Denied => {
                        ErrorResponse::forbidden().with_detail("Admin privileges required.")
                    }
                    DomainError::Validation(detail) => ErrorResponse::unprocessable(detail),
                    DomainError::NotFound { .. } => ErrorResponse::not_found(err.to_string()),
                    _ => ErrorResponse::new(
                        status.as_u16(),
                        status.canonical_reason().unwrap_or("Error"),
                    )
                    .with_detail(err.to_string()),
                };
                if err.is_retryable() {
                    response.retryable()
                } else {
                    response
                }
            }
            AppError::Internal(detail) => {
                // Log internal errors
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
