//! Role gate for route scopes.
//!
//! Reads the session user id, resolves it into a [`UserContext`] through
//! [`HttpState::user_context`] and applies [`authorize_with`]. Rejections
//! short-circuit with the domain error envelope; allowed requests carry the
//! resolved context in their extensions.
//!
//! The session middleware must wrap this gate.

use std::rc::Rc;
use std::task::{Context, Poll};

use actix_session::SessionExt;
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{HttpMessage, web};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::debug;

use crate::domain::{AnonymousPolicy, Decision, Error, Role, UserContext, authorize_with};
use crate::inbound::http::current_user::resolve_user_context;
use crate::inbound::http::state::HttpState;

/// Middleware factory restricting a scope to one [`Role`].
///
/// # Examples
/// ```
/// use actix_web::{App, HttpResponse, web};
/// use storefront::domain::Role;
/// use storefront::middleware::AccessGate;
///
/// let _app = App::new().service(
///     web::scope("/admin")
///         .wrap(AccessGate::new(Role::Admin))
///         .route("/ping", web::get().to(HttpResponse::Ok)),
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AccessGate {
    required: Role,
    policy: AnonymousPolicy,
}

impl AccessGate {
    /// Gate requiring `required`; anonymous requests pass through.
    pub fn new(required: Role) -> Self {
        Self {
            required,
            policy: AnonymousPolicy::PassThrough,
        }
    }

    /// Reject anonymous requests with `401 Unauthorized`.
    #[must_use]
    pub fn reject_anonymous(mut self) -> Self {
        self.policy = AnonymousPolicy::Reject;
        self
    }

    pub fn required_role(&self) -> Role {
        self.required
    }

    pub fn policy(&self) -> AnonymousPolicy {
        self.policy
    }
}

impl<S, B> Transform<S, ServiceRequest> for AccessGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = AccessGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AccessGateMiddleware {
            service: Rc::new(service),
            gate: *self,
        }))
    }
}

/// Service produced by [`AccessGate`].
pub struct AccessGateMiddleware<S> {
    service: Rc<S>,
    gate: AccessGate,
}

async fn resolve_context(req: &ServiceRequest) -> Result<UserContext, Error> {
    let state = req
        .app_data::<web::Data<HttpState>>()
        .ok_or_else(|| Error::internal("access gate mounted without HTTP state"))?;
    resolve_user_context(&req.get_session(), state).await
}

impl<S, B> Service<ServiceRequest> for AccessGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let AccessGate { required, policy } = self.gate;
        Box::pin(async move {
            let context = match resolve_context(&req).await {
                Ok(context) => context,
                Err(err) => return Ok(req.error_response(err).map_into_right_body()),
            };
            match authorize_with(policy, &context, required) {
                Decision::Allow => {
                    req.extensions_mut().insert(context);
                    service.call(req).await.map(ServiceResponse::map_into_left_body)
                }
                Decision::Reject(rejection) => {
                    debug!(
                        path = req.path(),
                        required = %required,
                        status = rejection.status().http_status(),
                        "access gate rejected request"
                    );
                    Ok(req
                        .error_response(Error::from(rejection))
                        .map_into_right_body())
                }
            }
        })
    }
}
