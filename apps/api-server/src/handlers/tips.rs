//! Reader endpoints: browse pages, today's tip and the random tip.
//!
//! Every request reads the collection from the store, so writes made by other
//! processes or other instances are visible on the next request.

use actix_web::{HttpResponse, web};
use tipline_core::services::{PageView, feed, fetch_canonical};
use tipline_shared::dto::{FeedResponse, PageQuery, TipPageResponse};

use super::tip_response;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/tips?page=N
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let page = query.page.unwrap_or(1).max(1);
    let tips = fetch_canonical(state.store.as_ref()).await?;

    let view = PageView::new(&tips, page, state.page_size);
    Ok(HttpResponse::Ok().json(TipPageResponse {
        items: view.items.iter().map(tip_response).collect(),
        page: view.page,
        page_size: view.page_size,
        page_count: view.page_count,
        total: view.total,
        has_next: view.has_next(),
        has_previous: view.has_previous(),
    }))
}

/// GET /api/tips/today
pub async fn today(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let tips = fetch_canonical(state.store.as_ref()).await?;
    Ok(HttpResponse::Ok().json(feed::today(&tips).map(tip_response)))
}

/// GET /api/tips/random - draws a fresh random tip.
pub async fn random(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let tips = fetch_canonical(state.store.as_ref()).await?;
    let tip = feed::random(&tips, &mut rand::thread_rng()).map(tip_response);
    Ok(HttpResponse::Ok().json(tip))
}

/// GET /api/tips/feed
pub async fn feed(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let tips = fetch_canonical(state.store.as_ref()).await?;

    Ok(HttpResponse::Ok().json(FeedResponse {
        today: feed::today(&tips).map(tip_response),
        random: feed::random(&tips, &mut rand::thread_rng()).map(tip_response),
    }))
}
