//! Admin endpoints. Every handler takes [`AdminAccess`], so the gate runs first.

use actix_web::{HttpResponse, web};
use tipline_core::DomainError;
use tipline_core::domain::{Capability, TipDraft};
use tipline_core::services::{DeletionRequest, fetch_canonical};
use tipline_shared::ApiResponse;
use tipline_shared::dto::{AccessResponse, DeleteQuery, TipRequest};
use uuid::Uuid;

use super::tip_response;
use crate::middleware::auth::AdminAccess;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/admin/access
pub async fn access(admin: AdminAccess) -> AppResult<HttpResponse> {
    let identity = admin.0.identity();

    Ok(HttpResponse::Ok().json(AccessResponse {
        user_id: identity.user_id,
        email: identity.email.clone(),
        capabilities: vec![Capability::ManageTips.as_str().to_string()],
    }))
}

/// POST /api/admin/tips
pub async fn create(
    state: web::Data<AppState>,
    admin: AdminAccess,
    body: web::Json<TipRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let tip = state
        .tips
        .create(&admin.0, TipDraft::new(req.title, req.content))
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        tip_response(&tip),
        "Tip created successfully",
    )))
}

/// PUT /api/admin/tips/{id}
pub async fn update(
    state: web::Data<AppState>,
    admin: AdminAccess,
    path: web::Path<Uuid>,
    body: web::Json<TipRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();
    state
        .tips
        .update(&admin.0, id, TipDraft::new(req.title, req.content))
        .await?;

    // The write already succeeded; a failed read-back only drops the echo.
    let updated = match fetch_canonical(state.store.as_ref()).await {
        Ok(tips) => tips.iter().find(|t| t.id == id).map(tip_response),
        Err(e) => {
            tracing::warn!(tip_id = %id, error = %e, "Could not read back updated tip");
            None
        }
    };
    Ok(HttpResponse::Ok().json(ApiResponse {
        success: true,
        data: updated,
        message: Some("Tip updated successfully".to_string()),
    }))
}

/// DELETE /api/admin/tips/{id}?confirm=true
pub async fn delete(
    state: web::Data<AppState>,
    admin: AdminAccess,
    path: web::Path<Uuid>,
    query: web::Query<DeleteQuery>,
) -> AppResult<HttpResponse> {
    let request = DeletionRequest::new(path.into_inner());
    if !query.confirm {
        return Err(DomainError::ConfirmationRequired.into());
    }

    state.tips.delete(&admin.0, request.confirm()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        request.id(),
        "Tip deleted successfully",
    )))
}
