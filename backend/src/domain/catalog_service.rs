//! Catalogue read services implementing the listing and dashboard ports.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{CatalogQuery, DashboardQuery, ProductRepository, ProductRepositoryError};
use crate::domain::{Error, InventorySummary, ProductCatalogEntry, ProductId, StockRule};

/// Catalogue service backed by a [`ProductRepository`].
#[derive(Clone)]
pub struct CatalogService<R: ?Sized> {
    products: Arc<R>,
    rule: StockRule,
}

impl<R: ?Sized> CatalogService<R> {
    /// Create a service classifying stock with `rule`.
    pub fn new(products: Arc<R>, rule: StockRule) -> Self {
        Self { products, rule }
    }

    pub fn stock_rule(&self) -> StockRule {
        self.rule
    }
}

fn map_product_error(error: ProductRepositoryError) -> Error {
    match error {
        ProductRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("product repository unavailable: {message}"))
        }
        ProductRepositoryError::Query { message } => {
            Error::internal(format!("product repository error: {message}"))
        }
        ProductRepositoryError::InvalidRow { message } => {
            Error::internal(format!("stored product is invalid: {message}"))
        }
    }
}

#[async_trait]
impl<R> CatalogQuery for CatalogService<R>
where
    R: ProductRepository + ?Sized,
{
    async fn list_entries(&self) -> Result<Vec<ProductCatalogEntry>, Error> {
        self.products.list_all().await.map_err(map_product_error)
    }

    async fn find_entry(&self, id: ProductId) -> Result<ProductCatalogEntry, Error> {
        self.products
            .find_by_id(id)
            .await
            .map_err(map_product_error)?
            .ok_or_else(|| Error::not_found(format!("product {id} not found")))
    }
}

#[async_trait]
impl<R> DashboardQuery for CatalogService<R>
where
    R: ProductRepository + ?Sized,
{
    async fn inventory_summary(&self) -> Result<InventorySummary, Error> {
        let entries = self.products.list_all().await.map_err(map_product_error)?;
        InventorySummary::from_entries(&entries, self.rule)
            .map_err(|err| Error::internal(format!("inventory summary failed: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::{FixtureProductRepository, MockProductRepository};
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn lists_repository_entries() {
        let service = CatalogService::new(Arc::new(FixtureProductRepository), StockRule::default());
        let entries = service.list_entries().await.expect("entries");
        assert_eq!(entries.len(), 6);
    }

    #[rstest]
    #[case(ProductRepositoryError::connection("down"), ErrorCode::ServiceUnavailable)]
    #[case(ProductRepositoryError::query("syntax"), ErrorCode::InternalError)]
    #[case(ProductRepositoryError::invalid_row("negative"), ErrorCode::InternalError)]
    #[tokio::test]
    async fn maps_repository_failures(
        #[case] failure: ProductRepositoryError,
        #[case] expected: ErrorCode,
    ) {
        let mut repo = MockProductRepository::new();
        repo.expect_list_all().times(1).return_once(move || Err(failure));
        let service = CatalogService::new(Arc::new(repo), StockRule::default());

        let err = service.list_entries().await.expect_err("failure propagates");
        assert_eq!(err.code(), expected);
    }

    #[rstest]
    #[tokio::test]
    async fn finds_a_single_entry() {
        let service = CatalogService::new(Arc::new(FixtureProductRepository), StockRule::default());
        let entry = service
            .find_entry(ProductId::new(2).expect("id"))
            .await
            .expect("entry");
        assert_eq!(entry.name().as_str(), "Varminlo TKL");
    }

    #[rstest]
    #[tokio::test]
    async fn missing_entry_is_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id().times(1).return_once(|_| Ok(None));
        let service = CatalogService::new(Arc::new(repo), StockRule::default());

        let err = service
            .find_entry(ProductId::new(99).expect("id"))
            .await
            .expect_err("missing");
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), "product 99 not found");
    }

    #[rstest]
    #[case(StockRule::default(), 0, 1)]
    #[case(StockRule::Literal, 1, 0)]
    #[tokio::test]
    async fn summary_uses_configured_rule(
        #[case] rule: StockRule,
        #[case] low: usize,
        #[case] out: usize,
    ) {
        let service = CatalogService::new(Arc::new(FixtureProductRepository), rule);
        let summary = service.inventory_summary().await.expect("summary");
        assert_eq!(summary.entry_count, 6);
        assert_eq!(summary.low_stock, low);
        assert_eq!(summary.out_of_stock, out);
    }
}
