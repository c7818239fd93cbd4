//! Storefront inventory backend.
//!
//! Domain types and services live in [`domain`]; [`inbound`] and
//! [`outbound`] hold the HTTP and persistence adapters.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod seeding;
#[cfg(feature = "test-support")]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::trace::{Trace, TraceId};
