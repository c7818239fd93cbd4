//! Driving port turning a session identity into a [`UserContext`].

use async_trait::async_trait;

use crate::domain::{Error, UserContext, UserId};

/// Resolves the user id stored in a session.
///
/// Implementations return [`UserContext::Anonymous`] for `None` and for ids
/// no longer backed by a stored user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserContextQuery: Send + Sync {
    async fn resolve(&self, user_id: Option<UserId>) -> Result<UserContext, Error>;
}
