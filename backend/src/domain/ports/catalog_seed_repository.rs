//! Port abstraction for replacing the catalogue with seed data.
//!
//! Adapters must run the whole reset inside one transaction so a failure
//! leaves the previous rows untouched.

use async_trait::async_trait;

use crate::domain::{NewProduct, User};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by catalogue seed adapters.
    pub enum CatalogSeedRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "catalogue seeding connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "catalogue seeding query failed: {message}",
    }
}

/// Rows written by a seed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSeedRequest {
    pub user: User,
    pub products: Vec<NewProduct>,
}

/// Row counts reported after a seed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CatalogSeedOutcome {
    pub users_inserted: usize,
    pub products_inserted: usize,
}

/// Port for truncate-then-insert seeding.
///
/// Implementations must, in order and atomically:
/// - delete every product;
/// - delete every user;
/// - insert the seed user;
/// - insert the seed products.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogSeedRepository: Send + Sync {
    async fn reset_and_seed(
        &self,
        request: CatalogSeedRequest,
    ) -> Result<CatalogSeedOutcome, CatalogSeedRepositoryError>;
}
