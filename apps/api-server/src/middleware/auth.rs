//! Admin gate extractor.

use std::future::Future;
use std::pin::Pin;

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use tipline_core::services::AdminCapability;

use crate::middleware::error::AppError;
use crate::state::AppState;

/// Runs the admin gate for the request.
///
/// Use this in handlers to require admin access:
/// ```ignore
/// async fn create(admin: AdminAccess) -> impl Responder {
///     format!("Hello, admin {}!", admin.0.identity().user_id)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AdminAccess(pub AdminCapability);

/// Credentials from the `Authorization` header, without the `Bearer ` prefix.
fn bearer_token(req: &HttpRequest) -> Option<String> {
    let value = req.headers().get(header::AUTHORIZATION)?;
    // An unreadable header still counts as presented credentials; the
    // resolver rejects it as an invalid token.
    let raw = value.to_str().unwrap_or_default();
    Some(raw.strip_prefix("Bearer ").unwrap_or(raw).trim().to_string())
}

impl FromRequest for AdminAccess {
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let token = bearer_token(req);

        Box::pin(async move {
            let state = state.ok_or_else(|| {
                tracing::error!("AppState not found in app data");
                AppError::Internal("Server configuration error".to_string())
            })?;

            let access = state.gate.evaluate(token.as_deref()).await;
            Ok(AdminAccess(access.into_result()?))
        })
    }
}
