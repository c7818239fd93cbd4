//! User data model.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::role::Role;

/// Maximum length, in characters, of names and email addresses.
pub const USER_FIELD_MAX: usize = 255;

/// Validation errors raised by the user value constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    #[error("user id must be a valid UUID")]
    InvalidId,
    #[error("user name must not be empty")]
    EmptyName,
    #[error("user name must be at most {max} characters")]
    NameTooLong { max: usize },
    #[error("email address must not be empty")]
    EmptyEmail,
    #[error("email address must contain a local part and a domain")]
    MalformedEmail,
    #[error("email address must be at most {max} characters")]
    EmailTooLong { max: usize },
}

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = String, format = Uuid)]
pub struct UserId(Uuid);

impl UserId {
    /// Parse a textual identifier.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let raw = id.as_ref();
        if raw.trim() != raw {
            return Err(UserValidationError::InvalidId);
        }
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId)
    }

    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for UserId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Trimmed, non-empty display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
#[schema(value_type = String, example = "Test User")]
pub struct UserName(String);

impl UserName {
    pub fn new(name: impl Into<String>) -> Result<Self, UserValidationError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        if trimmed.chars().count() > USER_FIELD_MAX {
            return Err(UserValidationError::NameTooLong {
                max: USER_FIELD_MAX,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserName> for String {
    fn from(value: UserName) -> Self {
        value.0
    }
}

/// Lower-cased email address with exactly one `@`.
///
/// Only the shape is checked; deliverability belongs to the auth subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
#[schema(value_type = String, example = "test@example.com")]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(email: impl Into<String>) -> Result<Self, UserValidationError> {
        let email = email.into();
        let normalised = email.trim().to_lowercase();
        if normalised.is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        if normalised.chars().count() > USER_FIELD_MAX {
            return Err(UserValidationError::EmailTooLong {
                max: USER_FIELD_MAX,
            });
        }
        let mut parts = normalised.split('@');
        let well_formed = matches!(
            (parts.next(), parts.next(), parts.next()),
            (Some(local), Some(domain), None)
                if !local.is_empty() && !domain.is_empty() && !domain.contains(char::is_whitespace)
                    && !local.contains(char::is_whitespace)
        );
        if !well_formed {
            return Err(UserValidationError::MalformedEmail);
        }
        Ok(Self(normalised))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

/// Application user.
///
/// ## Invariants
/// - `name` is trimmed and non-empty.
/// - `email` is lower-case and well formed.
///
/// # Examples
/// ```
/// use storefront::domain::{EmailAddress, Role, User, UserId, UserName};
///
/// let user = User::new(
///     UserId::random(),
///     UserName::new("Test User").expect("valid name"),
///     EmailAddress::new("Test@Example.com").expect("valid email"),
///     Role::Customer,
/// );
/// assert_eq!(user.email().as_str(), "test@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    name: UserName,
    email: EmailAddress,
    role: Role,
}

impl User {
    pub fn new(id: UserId, name: UserName, email: EmailAddress, role: Role) -> Self {
        Self {
            id,
            name,
            email,
            role,
        }
    }

    /// Validate raw strings into a [`User`].
    pub fn try_from_parts(
        id: &str,
        name: &str,
        email: &str,
        role: Role,
    ) -> Result<Self, UserValidationError> {
        Ok(Self::new(
            UserId::new(id)?,
            UserName::new(name)?,
            EmailAddress::new(email)?,
            role,
        ))
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn role(&self) -> Role {
        self.role
    }
}
