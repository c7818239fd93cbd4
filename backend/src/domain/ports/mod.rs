//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod catalog_query;
mod catalog_seed_repository;
mod dashboard_query;
mod product_repository;
mod user_context_query;
mod user_repository;

pub use catalog_query::CatalogQuery;
#[cfg(test)]
pub use catalog_seed_repository::MockCatalogSeedRepository;
pub use catalog_seed_repository::{
    CatalogSeedOutcome, CatalogSeedRepository, CatalogSeedRepositoryError, CatalogSeedRequest,
};
pub use dashboard_query::DashboardQuery;
#[cfg(test)]
pub use product_repository::MockProductRepository;
pub use product_repository::{
    FixtureProductRepository, ProductRepository, ProductRepositoryError,
};
#[cfg(test)]
pub use user_context_query::MockUserContextQuery;
pub use user_context_query::UserContextQuery;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{FixtureUserRepository, UserPersistenceError, UserRepository};
