//! Test helpers for inbound HTTP components.

use actix_http::Request;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{HttpResponse, test, web};

use std::sync::Arc;

use super::session::SessionContext;
use super::state::{HttpState, HttpStatePorts};
use crate::domain::ports::MockUserContextQuery;
use crate::domain::{Error, StockRule, UserContext, UserId};

/// Path of the helper route that mints a session for a user id.
pub const TEST_LOGIN_PATH: &str = "/__test/login/{user_id}";

/// Cookie session middleware with a fresh key, cookie name `session` and
/// `Secure` disabled for plain HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

async fn mint_session(
    path: web::Path<String>,
    session: SessionContext,
) -> Result<HttpResponse, Error> {
    let user_id =
        UserId::new(path.into_inner()).map_err(|err| Error::invalid_request(err.to_string()))?;
    session.persist_user(&user_id)?;
    Ok(HttpResponse::NoContent().finish())
}

/// Register the session-minting helper route.
pub fn login_route(cfg: &mut web::ServiceConfig) {
    cfg.route(TEST_LOGIN_PATH, web::post().to(mint_session));
}

/// Fixture catalogue state whose user lookup always yields `context`.
pub fn state_resolving(context: UserContext, stock_rule: StockRule) -> HttpState {
    let mut resolver = MockUserContextQuery::new();
    resolver.expect_resolve().returning(move |_| Ok(context));
    state_with_resolver(resolver, stock_rule)
}

/// Fixture catalogue state backed by `resolver` for user lookups.
pub fn state_with_resolver(resolver: MockUserContextQuery, stock_rule: StockRule) -> HttpState {
    let fixtures = HttpState::fixtures(stock_rule);
    HttpState::new(
        HttpStatePorts {
            catalog: fixtures.catalog,
            dashboard: fixtures.dashboard,
            user_context: Arc::new(resolver),
        },
        stock_rule,
    )
}

/// Call the helper route and return the issued session cookie.
pub async fn login_cookie<S, B>(app: &S, user_id: UserId) -> Cookie<'static>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
{
    let req = test::TestRequest::post()
        .uri(&format!("/__test/login/{user_id}"))
        .to_request();
    let res = test::call_service(app, req).await;
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(Cookie::into_owned)
        .expect("session cookie issued")
}
