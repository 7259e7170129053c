use std::collections::HashSet;
use std::sync::Arc;

use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use tipline_core::domain::{Identity, TipDraft};
use tipline_core::ports::TipStore;
use tipline_infra::{InMemoryRoleDirectory, InMemoryTipStore, JwtConfig, JwtIdentityResolver};
use tipline_shared::dto::{AccessResponse, FeedResponse, TipPageResponse, TipRequest, TipResponse};
use tipline_shared::{ApiResponse, ErrorResponse};
use uuid::Uuid;

use super::configure_routes;
use crate::state::AppState;

struct Harness {
    state: AppState,
    store: Arc<InMemoryTipStore>,
    issuer: JwtIdentityResolver,
    admin: Identity,
}

impl Harness {
    fn new() -> Self {
        let config = JwtConfig {
            secret: "handler-test-secret".to_string(),
            issuer: "handler-tests".to_string(),
            expiration_hours: 1,
        };
        let admin = Identity::new(Uuid::new_v4());
        let store = Arc::new(InMemoryTipStore::new());
        let state = AppState::from_parts(
            store.clone(),
            Arc::new(InMemoryRoleDirectory::with_admins([admin.user_id])),
            Arc::new(JwtIdentityResolver::new(config.clone())),
            2,
        );

        Self {
            state,
            store,
            issuer: JwtIdentityResolver::new(config),
            admin,
        }
    }

    fn bearer(&self, identity: &Identity) -> (header::HeaderName, String) {
        let token = self.issuer.issue(identity).unwrap();
        (header::AUTHORIZATION, format!("Bearer {token}"))
    }

    fn admin_auth(&self) -> (header::HeaderName, String) {
        self.bearer(&self.admin)
    }
}

fn tip_request(title: &str, content: &str) -> TipRequest {
    TipRequest {
        title: title.to_string(),
        content: content.to_string(),
    }
}

macro_rules! create_tip {
    ($app:expr, $harness:expr, $title:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/admin/tips")
            .insert_header($harness.admin_auth())
            .set_json(tip_request($title, "content"))
            .to_request();
        let created: ApiResponse<TipResponse> = test::call_and_read_body_json(&$app, req).await;
        created.data.unwrap()
    }};
}

macro_rules! app {
    ($harness:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($harness.state.clone()))
                .configure(configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_empty_collection_is_not_an_error() {
    let h = Harness::new();
    let app = app!(h);

    let page: TipPageResponse =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api/tips").to_request())
            .await;
    assert!(page.items.is_empty());
    assert_eq!(page.page_count, 0);

    let today: Option<TipResponse> = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/tips/today").to_request(),
    )
    .await;
    assert!(today.is_none());
}

#[actix_web::test]
async fn test_admin_creates_tip_and_it_becomes_today() {
    let h = Harness::new();
    let app = app!(h);

    let req = test::TestRequest::post()
        .uri("/api/admin/tips")
        .insert_header(h.admin_auth())
        .set_json(tip_request("Enable 2FA", "Use an authenticator app."))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let today: Option<TipResponse> = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/tips/today").to_request(),
    )
    .await;
    assert_eq!(today.unwrap().title, "Enable 2FA");
}

#[actix_web::test]
async fn test_gate_rejects_non_admins() {
    let h = Harness::new();
    let app = app!(h);

    let anonymous = test::TestRequest::post()
        .uri("/api/admin/tips")
        .set_json(tip_request("t", "c"))
        .to_request();
    assert_eq!(
        test::call_service(&app, anonymous).await.status(),
        StatusCode::UNAUTHORIZED
    );

    let reader = Identity::new(Uuid::new_v4());
    let req = test::TestRequest::post()
        .uri("/api/admin/tips")
        .insert_header(h.bearer(&reader))
        .set_json(tip_request("t", "c"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::FORBIDDEN
    );

    let garbage = test::TestRequest::get()
        .uri("/api/admin/access")
        .insert_header((header::AUTHORIZATION, "Bearer not-a-jwt"))
        .to_request();
    assert_eq!(
        test::call_service(&app, garbage).await.status(),
        StatusCode::UNAUTHORIZED
    );

    let page: TipPageResponse =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api/tips").to_request())
            .await;
    assert_eq!(page.total, 0);
}

#[actix_web::test]
async fn test_blank_fields_are_unprocessable() {
    let h = Harness::new();
    let app = app!(h);

    let req = test::TestRequest::post()
        .uri("/api/admin/tips")
        .insert_header(h.admin_auth())
        .set_json(tip_request("   ", "content"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let problem: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(problem.detail.as_deref(), Some("title must not be empty"));
}

#[actix_web::test]
async fn test_delete_requires_confirmation() {
    let h = Harness::new();
    let app = app!(h);

    let req = test::TestRequest::post()
        .uri("/api/admin/tips")
        .insert_header(h.admin_auth())
        .set_json(tip_request("Patch often", "Enable automatic updates."))
        .to_request();
    let created: ApiResponse<TipResponse> =
        test::call_and_read_body_json(&app, req).await;
    let id = created.data.unwrap().id;

    let unconfirmed = test::TestRequest::delete()
        .uri(&format!("/api/admin/tips/{id}"))
        .insert_header(h.admin_auth())
        .to_request();
    assert_eq!(
        test::call_service(&app, unconfirmed).await.status(),
        StatusCode::PRECONDITION_REQUIRED
    );

    let confirmed = test::TestRequest::delete()
        .uri(&format!("/api/admin/tips/{id}?confirm=true"))
        .insert_header(h.admin_auth())
        .to_request();
    assert_eq!(test::call_service(&app, confirmed).await.status(), StatusCode::OK);

    let page: TipPageResponse =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api/tips").to_request())
            .await;
    assert_eq!(page.total, 0);
}

#[actix_web::test]
async fn test_update_missing_tip_is_not_found() {
    let h = Harness::new();
    let app = app!(h);

    let req = test::TestRequest::put()
        .uri(&format!("/api/admin/tips/{}", Uuid::new_v4()))
        .insert_header(h.admin_auth())
        .set_json(tip_request("t", "c"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let problem: ErrorResponse = test::read_body_json(resp).await;
    assert!(problem.retryable);
}

#[actix_web::test]
async fn test_pages_after_mutations() {
    let h = Harness::new();
    let app = app!(h);

    for n in 1..=3 {
        let req = test::TestRequest::post()
            .uri("/api/admin/tips")
            .insert_header(h.admin_auth())
            .set_json(tip_request(&format!("Tip {n}"), "content"))
            .to_request();
        assert!(test::call_service(&app, req).await.status().is_success());
    }

    let first: TipPageResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/tips?page=1").to_request(),
    )
    .await;
    assert_eq!(first.items.len(), 2);
    assert_eq!(first.page_count, 2);
    assert!(first.has_next);

    let second: TipPageResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/tips?page=2").to_request(),
    )
    .await;
    assert_eq!(second.items.len(), 1);
    assert!(!second.has_next);
    assert!(second.has_previous);

    let unique: HashSet<Uuid> = first.items.iter().chain(&second.items).map(|t| t.id).collect();
    assert_eq!(unique.len(), 3);
}

#[actix_web::test]
async fn test_readers_see_writes_made_directly_in_the_store() {
    let h = Harness::new();
    let app = app!(h);

    let before: Option<TipResponse> = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/tips/today").to_request(),
    )
    .await;
    assert!(before.is_none());

    let added = h
        .store
        .insert(TipDraft::new("Written elsewhere", "By another instance."))
        .await
        .unwrap();

    let today: Option<TipResponse> = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/tips/today").to_request(),
    )
    .await;
    assert_eq!(today.map(|t| t.id), Some(added.id));

    let page: TipPageResponse =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api/tips").to_request())
            .await;
    assert_eq!(page.total, 1);
}

#[actix_web::test]
async fn test_random_is_null_when_empty_then_a_member() {
    let h = Harness::new();
    let app = app!(h);

    let empty: Option<TipResponse> = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/tips/random").to_request(),
    )
    .await;
    assert!(empty.is_none());

    let first = create_tip!(app, h, "Lock your screen");
    let second = create_tip!(app, h, "Check the sender");

    for _ in 0..5 {
        let drawn: Option<TipResponse> = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/api/tips/random").to_request(),
        )
        .await;
        let id = drawn.unwrap().id;
        assert!(id == first.id || id == second.id);
    }
}

#[actix_web::test]
async fn test_feed_pairs_today_with_a_random_tip() {
    let h = Harness::new();
    let app = app!(h);

    let empty: FeedResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/tips/feed").to_request(),
    )
    .await;
    assert!(empty.today.is_none());
    assert!(empty.random.is_none());

    let only = create_tip!(app, h, "Use strong passphrases");

    let feed: FeedResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/tips/feed").to_request(),
    )
    .await;
    assert_eq!(feed.today.as_ref(), Some(&only));
    assert_eq!(feed.random.as_ref(), Some(&only));
}

#[actix_web::test]
async fn test_access_reports_admin_capabilities() {
    let h = Harness::new();
    let app = app!(h);

    let req = test::TestRequest::get()
        .uri("/api/admin/access")
        .insert_header(h.admin_auth())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let access: AccessResponse = test::read_body_json(resp).await;
    assert_eq!(access.user_id, h.admin.user_id);
    assert_eq!(access.capabilities, vec!["manage_tips".to_string()]);
}

#[actix_web::test]
async fn test_update_changes_only_the_target() {
    let h = Harness::new();
    let app = app!(h);

    let kept = create_tip!(app, h, "Keep me");
    let target = create_tip!(app, h, "Change me");

    let req = test::TestRequest::put()
        .uri(&format!("/api/admin/tips/{}", target.id))
        .insert_header(h.admin_auth())
        .set_json(tip_request("Changed", "New body"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: ApiResponse<TipResponse> = test::read_body_json(resp).await;
    let echoed = body.data.unwrap();
    assert_eq!(echoed.title, "Changed");
    assert_eq!(echoed.content, "New body");
    assert_eq!(echoed.date_posted, target.date_posted);

    let page: TipPageResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/tips?page=1").to_request(),
    )
    .await;
    assert_eq!(page.total, 2);
    assert!(page.items.contains(&echoed));
    assert!(page.items.contains(&kept));
}
