//! Request correlation middleware.
//!
//! Every request runs inside a task-local [`TraceId`] scope. A well-formed
//! `trace-id` header sent by an upstream proxy is reused; anything else gets
//! a fresh UUID. The identifier is echoed back on the response so clients can
//! quote it when reporting failures.
//!
//! Task-locals are not inherited by spawned tasks. Wrap spawned work in
//! [`TraceId::scope`] to keep the identifier visible.

use std::future::Future;
use std::task::{Context, Poll};

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tokio::task_local;
use tracing::{debug, error};
use uuid::Uuid;

/// Header carrying the correlation identifier in both directions.
pub const TRACE_ID_HEADER: &str = "trace-id";

task_local! {
    static CURRENT_TRACE: TraceId;
}

/// Correlation identifier for a single request.
///
/// # Examples
/// ```
/// use storefront::middleware::trace::TraceId;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let id = TraceId::generate();
/// let seen = TraceId::scope(id, async { TraceId::current() }).await;
/// assert_eq!(seen, Some(id));
/// # });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Identifier of the enclosing scope, if any.
    pub fn current() -> Option<Self> {
        CURRENT_TRACE.try_with(|id| *id).ok()
    }

    /// Run `fut` with `trace_id` visible through [`TraceId::current`].
    pub async fn scope<Fut>(trace_id: TraceId, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        CURRENT_TRACE.scope(trace_id, fut).await
    }

    fn from_request(req: &ServiceRequest) -> Self {
        let inbound = req
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|raw| raw.trim().parse::<TraceId>().ok());
        match inbound {
            Some(id) => {
                debug!(trace_id = %id, "reusing inbound trace identifier");
                id
            }
            None => Self::generate(),
        }
    }
}

impl std::fmt::Display for TraceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Middleware that scopes each request under a [`TraceId`] and writes the
/// `trace-id` response header.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use storefront::Trace;
///
/// let _app = App::new().wrap(Trace);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Trace;

impl<S, B> Transform<S, ServiceRequest> for Trace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceMiddleware { service }))
    }
}

/// Service produced by [`Trace`].
pub struct TraceMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = TraceId::from_request(&req);
        // The inner call must start inside the scope so extractors and
        // middleware further down observe the identifier.
        Box::pin(TraceId::scope(trace_id, {
            let fut = CURRENT_TRACE.sync_scope(trace_id, || self.service.call(req));
            async move {
                let mut res = fut.await?;
                match HeaderValue::from_str(&trace_id.to_string()) {
                    Ok(value) => {
                        res.headers_mut()
                            .insert(HeaderName::from_static(TRACE_ID_HEADER), value);
                    }
                    Err(err) => {
                        error!(
                            error = %err,
                            trace_id = %trace_id,
                            "trace identifier is not a valid header value"
                        );
                    }
                }
                Ok(res)
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Error as DomainError;
    use actix_web::{App, HttpResponse, test as actix_test, web};
    use rstest::rstest;

    async fn echo_trace() -> HttpResponse {
        match TraceId::current() {
            Some(id) => HttpResponse::Ok().body(id.to_string()),
            None => HttpResponse::InternalServerError().finish(),
        }
    }

    #[rstest]
    fn from_uuid_preserves_value() {
        let uuid = Uuid::new_v4();
        assert_eq!(TraceId::from_uuid(uuid).as_uuid(), &uuid);
    }

    #[rstest]
    #[case("00000000-0000-0000-0000-000000000000", true)]
    #[case("not-a-uuid", false)]
    #[case("", false)]
    fn parses_only_uuids(#[case] raw: &str, #[case] ok: bool) {
        assert_eq!(raw.parse::<TraceId>().is_ok(), ok);
    }

    #[tokio::test]
    async fn current_is_none_out_of_scope() {
        assert!(TraceId::current().is_none());
    }

    #[actix_web::test]
    async fn handler_sees_the_header_value() {
        let app = actix_test::init_service(
            App::new()
                .wrap(Trace)
                .route("/", web::get().to(echo_trace)),
        )
        .await;
        let req = actix_test::TestRequest::get().uri("/").to_request();
        let res = actix_test::call_service(&app, req).await;
        let header = res
            .headers()
            .get(TRACE_ID_HEADER)
            .expect("trace header present")
            .to_str()
            .expect("ascii header")
            .to_owned();
        let body = actix_test::read_body(res).await;
        assert_eq!(std::str::from_utf8(&body).expect("utf8"), header);
    }

    #[actix_web::test]
    async fn reuses_a_valid_inbound_identifier() {
        let inbound = "3fa85f64-5717-4562-b3fc-2c963f66afa6";
        let app = actix_test::init_service(
            App::new()
                .wrap(Trace)
                .route("/", web::get().to(echo_trace)),
        )
        .await;
        let req = actix_test::TestRequest::get()
            .uri("/")
            .insert_header((TRACE_ID_HEADER, inbound))
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(
            res.headers().get(TRACE_ID_HEADER).and_then(|v| v.to_str().ok()),
            Some(inbound)
        );
    }

    #[actix_web::test]
    async fn replaces_a_malformed_inbound_identifier() {
        let app = actix_test::init_service(
            App::new()
                .wrap(Trace)
                .route("/", web::get().to(echo_trace)),
        )
        .await;
        let req = actix_test::TestRequest::get()
            .uri("/")
            .insert_header((TRACE_ID_HEADER, "garbage"))
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        let header = res
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .expect("trace header present");
        assert!(header.parse::<TraceId>().is_ok());
    }

    #[actix_web::test]
    async fn domain_errors_carry_the_response_trace_id() {
        let app = actix_test::init_service(App::new().wrap(Trace).route(
            "/",
            web::get().to(|| async { Err::<HttpResponse, _>(DomainError::internal("boom")) }),
        ))
        .await;
        let req = actix_test::TestRequest::get().uri("/").to_request();
        let res = actix_test::call_service(&app, req).await;
        let header = res
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
            .expect("trace header present");
        let body: serde_json::Value = actix_test::read_body_json(res).await;
        assert_eq!(body["traceId"], serde_json::Value::String(header));
    }
}
