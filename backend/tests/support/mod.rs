//! Shared helpers for storefront integration tests.
//!
//! Integration tests compile as separate crates, so the app assembly and the
//! session-minting route live here rather than in each test file.

#![allow(dead_code)]

use std::sync::Arc;

use actix_http::Request;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpResponse, test, web};

use storefront::Trace;
use storefront::domain::ports::UserRepository;
use storefront::domain::{
    CatalogSeeder, EmailAddress, Error, Role, StockRule, User, UserId, UserName,
};
use storefront::inbound::http::configure_api;
use storefront::inbound::http::session::SessionContext;
use storefront::inbound::http::state::HttpState;
use storefront::test_support::in_memory::InMemoryCatalogStore;

pub const LOGIN_PATH: &str = "/api/v1/__test/login";

async fn mint_session(
    path: web::Path<String>,
    session: SessionContext,
) -> Result<HttpResponse, Error> {
    let user_id =
        UserId::new(path.into_inner()).map_err(|err| Error::invalid_request(err.to_string()))?;
    session.persist_user(&user_id)?;
    Ok(HttpResponse::NoContent().finish())
}

/// The production route layout over `state`, plus a route minting sessions
/// the way the external authentication service would.
pub fn storefront_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let session = SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build();
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .service(
            web::scope("/api/v1")
                .wrap(session)
                .route("/__test/login/{user_id}", web::post().to(mint_session))
                .configure(configure_api),
        )
}

/// Seeded store shared by the HTTP state and the test body.
pub async fn seeded_store() -> Arc<InMemoryCatalogStore> {
    let store = Arc::new(InMemoryCatalogStore::default());
    CatalogSeeder::new(store.clone())
        .seed()
        .await
        .expect("seeding the in-memory store succeeds");
    store
}

pub fn state_over(store: &Arc<InMemoryCatalogStore>) -> HttpState {
    HttpState::from_repositories(store.clone(), store.clone(), StockRule::default())
}

/// Store an extra user with `role` and return its id.
pub async fn add_user(store: &InMemoryCatalogStore, role: Role) -> UserId {
    let id = UserId::random();
    let user = User::new(
        id,
        UserName::new("Shop Admin").expect("valid name"),
        EmailAddress::new(format!("{id}@example.com")).expect("valid email"),
        role,
    );
    store.upsert(&user).await.expect("upsert succeeds");
    id
}

/// Mint a session for `user_id` and return its cookie.
pub async fn login<S, B>(app: &S, user_id: UserId) -> Cookie<'static>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
{
    let req = test::TestRequest::post()
        .uri(&format!("{LOGIN_PATH}/{user_id}"))
        .to_request();
    let res = test::call_service(app, req).await;
    assert!(res.status().is_success(), "login helper failed: {}", res.status());
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(Cookie::into_owned)
        .expect("session cookie issued")
}
