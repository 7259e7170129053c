//! HTTP handlers and route configuration.

mod admin;
mod health;
mod tips;

#[cfg(test)]
mod tests;

use actix_web::web;
use tipline_core::domain::Tip;
use tipline_shared::dto::TipResponse;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/tips")
                    .route("", web::get().to(tips::list))
                    .route("/today", web::get().to(tips::today))
                    .route("/random", web::get().to(tips::random))
                    .route("/feed", web::get().to(tips::feed)),
            )
            // Admin routes - gated by AdminAccess
            .service(
                web::scope("/admin")
                    .route("/access", web::get().to(admin::access))
                    .route("/tips", web::post().to(admin::create))
                    .route("/tips/{id}", web::put().to(admin::update))
                    .route("/tips/{id}", web::delete().to(admin::delete)),
            ),
    );
}

pub(crate) fn tip_response(tip: &Tip) -> TipResponse {
    TipResponse {
        id: tip.id,
        title: tip.title.clone(),
        content: tip.content.clone(),
        date_posted: tip.date_posted,
    }
}
