//! Port abstraction for reading the product catalogue.

use async_trait::async_trait;

use crate::domain::catalog_seed::seed_products;
use crate::domain::{ProductCatalogEntry, ProductId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by product repository adapters.
    pub enum ProductRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "product repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } => "product repository query failed: {message}",
        /// A stored row violates a domain invariant.
        InvalidRow { message: String } => "product row is invalid: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Every catalogue entry ordered by id.
    async fn list_all(&self) -> Result<Vec<ProductCatalogEntry>, ProductRepositoryError>;

    async fn find_by_id(
        &self,
        id: ProductId,
    ) -> Result<Option<ProductCatalogEntry>, ProductRepositoryError>;
}

/// Read-only repository serving the seed catalogue from memory.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureProductRepository;

impl FixtureProductRepository {
    fn entries() -> Result<Vec<ProductCatalogEntry>, ProductRepositoryError> {
        let drafts = seed_products()
            .map_err(|err| ProductRepositoryError::invalid_row(err.to_string()))?;
        drafts
            .into_iter()
            .zip(1_i64..)
            .map(|(draft, raw_id)| {
                ProductId::new(raw_id)
                    .map(|id| draft.into_entry(id))
                    .map_err(|err| ProductRepositoryError::invalid_row(err.to_string()))
            })
            .collect()
    }
}

#[async_trait]
impl ProductRepository for FixtureProductRepository {
    async fn list_all(&self) -> Result<Vec<ProductCatalogEntry>, ProductRepositoryError> {
        Self::entries()
    }

    async fn find_by_id(
        &self,
        id: ProductId,
    ) -> Result<Option<ProductCatalogEntry>, ProductRepositoryError> {
        Ok(Self::entries()?.into_iter().find(|entry| entry.id() == id))
    }
}
