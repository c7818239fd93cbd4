//! Extractor for the signed-in user behind a request.
//!
//! A session cookie only proves a user id was issued at some point. The
//! extractor resolves it against the user store, so ids whose user has since
//! been deleted count as anonymous and are refused with `401 Unauthorized`.
//! Requests that already passed an [`AccessGate`](crate::middleware::AccessGate)
//! reuse the context it stored instead of resolving twice.

use actix_session::{Session, SessionExt};
use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload, web};
use futures_util::future::LocalBoxFuture;

use super::session::user_id_from_session;
use super::state::HttpState;
use crate::domain::{Error, Role, UserContext, UserId};

/// Authenticated caller of a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
    user_id: UserId,
    role: Role,
}

impl CurrentUser {
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

impl TryFrom<UserContext> for CurrentUser {
    type Error = Error;

    fn try_from(context: UserContext) -> Result<Self, Self::Error> {
        match context {
            UserContext::Authenticated { user_id, role } => Ok(Self { user_id, role }),
            UserContext::Anonymous => Err(Error::unauthorized("Unauthorized")),
        }
    }
}

/// Resolve the session's user id into a [`UserContext`].
pub(crate) async fn resolve_user_context(
    session: &Session,
    state: &HttpState,
) -> Result<UserContext, Error> {
    let user_id = user_id_from_session(session)?;
    state.user_context.resolve(user_id).await
}

impl FromRequest for CurrentUser {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let stored = req.extensions().get::<UserContext>().copied();
        let session = req.get_session();
        let state = req.app_data::<web::Data<HttpState>>().cloned();
        Box::pin(async move {
            let context = match stored {
                Some(context) => context,
                None => {
                    let state = state.ok_or_else(|| {
                        Error::internal("current user extractor without HTTP state")
                    })?;
                    resolve_user_context(&session, &state).await?
                }
            };
            CurrentUser::try_from(context).map_err(actix_web::Error::from)
        })
    }
}
