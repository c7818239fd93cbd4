//! Domain primitives, aggregates and services.
//!
//! Purpose: strongly typed storefront entities (users, roles, catalogue
//! entries) plus the pure decisions made over them: role authorization,
//! stock classification and price formatting. Nothing here knows about HTTP
//! or SQL; adapters reach the domain through [`ports`].
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - UserContext, authorize, Decision: the access gate.
//! - ProductCatalogEntry, classify_stock, format_price: catalogue derivations.
//! - CatalogSeeder: truncate-then-insert catalogue seeding.

pub mod access;
pub mod catalog_seed;
pub mod catalog_service;
pub mod dashboard;
pub mod error;
pub mod ports;
pub mod price;
pub mod product;
pub mod role;
pub mod stock;
pub mod user;
pub mod user_context_service;

pub use self::access::{
    AnonymousPolicy, Decision, Rejection, RejectionStatus, UserContext, authorize, authorize_with,
};
pub use self::catalog_seed::{CatalogSeeder, CatalogSeedingError};
pub use self::catalog_service::CatalogService;
pub use self::dashboard::InventorySummary;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::price::{Price, PriceError, format_price};
pub use self::product::{
    Category, NewProduct, ProductCatalogEntry, ProductId, ProductName, ProductValidationError,
    Quantity,
};
pub use self::role::{Role, RoleParseError};
pub use self::stock::{StockRule, StockStatus, StockTone, classify_stock};
pub use self::user::{EmailAddress, User, UserId, UserName, UserValidationError};
pub use self::user_context_service::UserContextService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use storefront::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::forbidden("Forbidden"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
