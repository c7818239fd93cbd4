//! Role gating of the admin dashboard through the full HTTP stack.

mod support;

use actix_web::http::StatusCode;
use actix_web::test;
use rstest::rstest;
use serde_json::Value;
use storefront::domain::{CatalogSeeder, Role, UserId};
use storefront::middleware::trace::TRACE_ID_HEADER;

const DASHBOARD: &str = "/api/v1/admin/dashboard";

#[rstest]
#[actix_web::test]
async fn administrators_see_the_summary() {
    let store = support::seeded_store().await;
    let admin = support::add_user(&store, Role::Admin).await;
    let app = test::init_service(support::storefront_app(support::state_over(&store))).await;
    let cookie = support::login(&app, admin).await;

    let req = test::TestRequest::get().uri(DASHBOARD).cookie(cookie).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["entryCount"], 6);
    assert_eq!(body["unitsOnHand"], 1_090);
    assert_eq!(body["outOfStock"], 1);
    assert_eq!(body["formattedStockValue"], "63.500.000");
}

#[rstest]
#[actix_web::test]
async fn customers_are_forbidden() {
    let store = support::seeded_store().await;
    let seeded = store.users()[0].id();
    let app = test::init_service(support::storefront_app(support::state_over(&store))).await;
    let cookie = support::login(&app, seeded).await;

    let req = test::TestRequest::get().uri(DASHBOARD).cookie(cookie).to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    let header = res
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("trace id header");
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "forbidden");
    assert_eq!(body["message"], "Forbidden");
    assert_eq!(body["traceId"], header);
}

#[rstest]
#[case::no_session(None)]
#[case::unknown_user(Some(UserId::random()))]
#[actix_web::test]
async fn anonymous_callers_fall_through_to_unauthorised(#[case] session_user: Option<UserId>) {
    let store = support::seeded_store().await;
    let app = test::init_service(support::storefront_app(support::state_over(&store))).await;

    let mut req = test::TestRequest::get().uri(DASHBOARD);
    if let Some(user_id) = session_user {
        req = req.cookie(support::login(&app, user_id).await);
    }
    let res = test::call_service(&app, req.to_request()).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "unauthorized");
}

#[rstest]
#[actix_web::test]
async fn reseeding_signs_out_existing_admins() {
    let store = support::seeded_store().await;
    let admin = support::add_user(&store, Role::Admin).await;
    let app = test::init_service(support::storefront_app(support::state_over(&store))).await;
    let cookie = support::login(&app, admin).await;

    let req = test::TestRequest::get()
        .uri(DASHBOARD)
        .cookie(cookie.clone())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    CatalogSeeder::new(store.clone())
        .seed()
        .await
        .expect("reseed succeeds");

    let req = test::TestRequest::get().uri(DASHBOARD).cookie(cookie).to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}
