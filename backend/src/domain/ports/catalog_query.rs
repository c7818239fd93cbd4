//! Driving port for reading the product catalogue.

use async_trait::async_trait;

use crate::domain::{Error, ProductCatalogEntry, ProductId};

/// Use-case port backing the product listing endpoint.
#[async_trait]
pub trait CatalogQuery: Send + Sync {
    /// Every catalogue entry ordered by id.
    async fn list_entries(&self) -> Result<Vec<ProductCatalogEntry>, Error>;

    /// A single entry; missing ids yield an [`ErrorCode::NotFound`] error.
    ///
    /// [`ErrorCode::NotFound`]: crate::domain::ErrorCode::NotFound
    async fn find_entry(&self, id: ProductId) -> Result<ProductCatalogEntry, Error>;
}
