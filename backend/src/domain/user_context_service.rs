//! Resolves session identities against the user store.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::ports::{UserContextQuery, UserPersistenceError, UserRepository};
use crate::domain::{Error, UserContext, UserId};

#[derive(Clone)]
pub struct UserContextService<R: ?Sized> {
    users: Arc<R>,
}

impl<R: ?Sized> UserContextService<R> {
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

fn map_user_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

#[async_trait]
impl<R> UserContextQuery for UserContextService<R>
where
    R: UserRepository + ?Sized,
{
    async fn resolve(&self, user_id: Option<UserId>) -> Result<UserContext, Error> {
        let Some(user_id) = user_id else {
            return Ok(UserContext::Anonymous);
        };
        match self.users.find_by_id(&user_id).await.map_err(map_user_error)? {
            Some(user) => Ok(UserContext::authenticated(user.id(), user.role())),
            None => {
                warn!(%user_id, "session refers to an unknown user; treating as anonymous");
                Ok(UserContext::Anonymous)
            }
        }
    }
}
