//! Closed set of account roles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Account role.
///
/// Stored and serialised as lower-case strings (`"admin"`, `"customer"`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Shop administrator with access to the dashboard.
    Admin,
    /// Regular customer account; the schema default.
    #[default]
    Customer,
}

/// Raised when a stored role string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role `{value}`")]
pub struct RoleParseError {
    value: String,
}

impl RoleParseError {
    /// The rejected input.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Role {
    /// Storage representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Customer => "customer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "customer" => Ok(Self::Customer),
            other => Err(RoleParseError {
                value: other.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Role::Admin, "admin")]
    #[case(Role::Customer, "customer")]
    fn storage_form_round_trips(#[case] role: Role, #[case] raw: &str) {
        assert_eq!(role.as_str(), raw);
        assert_eq!(raw.parse::<Role>(), Ok(role));
    }

    #[rstest]
    #[case("Admin")]
    #[case("superuser")]
    #[case("")]
    fn rejects_unknown_strings(#[case] raw: &str) {
        let err = raw.parse::<Role>().expect_err("unknown role");
        assert_eq!(err.value(), raw);
    }

    #[rstest]
    fn serialises_lower_case() {
        assert_eq!(
            serde_json::to_value(Role::Admin).expect("serialise"),
            serde_json::json!("admin")
        );
    }

    #[rstest]
    fn defaults_to_customer() {
        assert_eq!(Role::default(), Role::Customer);
    }
}
