//! Session helpers keeping handlers free of actix-session details.
//!
//! Sessions are issued by the authentication service; this service only
//! reads the user id it stored. [`SessionContext::persist_user`] exists for
//! tests and tooling that need to mint a session.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::{Error, UserId};

/// Session key holding the authenticated user's id.
pub const USER_ID_KEY: &str = "user_id";

#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Store `user_id` in the session cookie.
    pub fn persist_user(&self, user_id: &UserId) -> Result<(), Error> {
        self.0
            .insert(USER_ID_KEY, user_id.to_string())
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// The user id stored in the session, if any.
    ///
    /// Malformed ids are treated as absent.
    pub fn user_id(&self) -> Result<Option<UserId>, Error> {
        user_id_from_session(&self.0)
    }
}

/// Read the user id from a raw actix session.
pub(crate) fn user_id_from_session(session: &Session) -> Result<Option<UserId>, Error> {
    let raw = session
        .get::<String>(USER_ID_KEY)
        .map_err(|error| Error::internal(format!("failed to read session: {error}")))?;
    Ok(raw.and_then(|raw| match UserId::new(&raw) {
        Ok(id) => Some(id),
        Err(error) => {
            warn!(%error, "invalid user id in session cookie");
            None
        }
    }))
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
