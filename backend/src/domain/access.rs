//! Role-based authorization decisions.
//!
//! The gate sees a [`UserContext`] and the [`Role`] a route requires and
//! answers with a [`Decision`]. Nothing here touches sessions or HTTP; the
//! actix middleware in `crate::middleware::access_gate` adapts it.
//!
//! Anonymous requests are let through by default. Routes that must never be
//! reachable without a login either compose an authentication check in front
//! (handlers take the `CurrentUser` extractor) or opt into
//! [`AnonymousPolicy::Reject`].

use serde::Serialize;

use super::error::{Error, ErrorCode};
use super::role::Role;
use super::user::UserId;

/// Identity attached to the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserContext {
    /// No authenticated identity.
    #[default]
    Anonymous,
    /// A signed-in user with their stored role.
    Authenticated { user_id: UserId, role: Role },
}

impl UserContext {
    pub fn authenticated(user_id: UserId, role: Role) -> Self {
        Self::Authenticated { user_id, role }
    }

    pub fn user_id(&self) -> Option<UserId> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated { user_id, .. } => Some(*user_id),
        }
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated { role, .. } => Some(*role),
        }
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous)
    }
}

/// How the gate treats requests that carry no identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnonymousPolicy {
    /// Allow; an upstream authentication check is expected to reject.
    #[default]
    PassThrough,
    /// Reject with 401.
    Reject,
}

/// Status attached to a rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionStatus {
    Unauthorized,
    Forbidden,
}

impl RejectionStatus {
    /// Numeric HTTP status equivalent.
    pub const fn http_status(self) -> u16 {
        match self {
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
        }
    }

    /// Fixed message returned to the caller.
    pub const fn message(self) -> &'static str {
        match self {
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
        }
    }
}

/// Reason the gate refused a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rejection {
    status: RejectionStatus,
}

impl Rejection {
    pub const fn unauthorized() -> Self {
        Self {
            status: RejectionStatus::Unauthorized,
        }
    }

    pub const fn forbidden() -> Self {
        Self {
            status: RejectionStatus::Forbidden,
        }
    }

    pub const fn status(&self) -> RejectionStatus {
        self.status
    }

    pub const fn message(&self) -> &'static str {
        self.status.message()
    }
}

impl From<Rejection> for Error {
    fn from(value: Rejection) -> Self {
        let code = match value.status {
            RejectionStatus::Unauthorized => ErrorCode::Unauthorized,
            RejectionStatus::Forbidden => ErrorCode::Forbidden,
        };
        Error::new(code, value.message())
    }
}

/// Outcome of an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Reject(Rejection),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Convert into a `Result`, mapping a rejection onto the domain error.
    pub fn into_result(self) -> Result<(), Error> {
        match self {
            Self::Allow => Ok(()),
            Self::Reject(rejection) => Err(rejection.into()),
        }
    }
}

/// Decide whether `context` may reach a route requiring `required`.
///
/// Anonymous callers are allowed; see [`authorize_with`] for the stricter
/// policy.
///
/// # Examples
/// ```
/// use storefront::domain::{authorize, Decision, Role, UserContext, UserId};
///
/// let admin = UserContext::authenticated(UserId::random(), Role::Admin);
/// assert_eq!(authorize(&admin, Role::Admin), Decision::Allow);
/// ```
pub fn authorize(context: &UserContext, required: Role) -> Decision {
    authorize_with(AnonymousPolicy::PassThrough, context, required)
}

/// [`authorize`] with an explicit [`AnonymousPolicy`].
pub fn authorize_with(policy: AnonymousPolicy, context: &UserContext, required: Role) -> Decision {
    match (context, policy) {
        (UserContext::Authenticated { role, .. }, _) if *role != required => {
            Decision::Reject(Rejection::forbidden())
        }
        (UserContext::Authenticated { .. }, _) => Decision::Allow,
        (UserContext::Anonymous, AnonymousPolicy::PassThrough) => Decision::Allow,
        (UserContext::Anonymous, AnonymousPolicy::Reject) => {
            Decision::Reject(Rejection::unauthorized())
        }
    }
}
