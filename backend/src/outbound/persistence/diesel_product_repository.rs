//! PostgreSQL-backed [`ProductRepository`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ProductRepository, ProductRepositoryError};
use crate::domain::{ProductCatalogEntry, ProductId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::ProductRow;
use super::pool::DbPool;
use super::schema::products;

/// Diesel-backed product repository.
#[derive(Clone)]
pub struct DieselProductRepository {
    pool: DbPool,
}

impl DieselProductRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn query_error(error: diesel::result::Error) -> ProductRepositoryError {
    map_diesel_error(
        error,
        |message| ProductRepositoryError::query(message),
        |message| ProductRepositoryError::connection(message),
    )
}

fn into_entry(row: ProductRow) -> Result<ProductCatalogEntry, ProductRepositoryError> {
    ProductCatalogEntry::try_from(row)
        .map_err(|message| ProductRepositoryError::invalid_row(message))
}

#[async_trait]
impl ProductRepository for DieselProductRepository {
    async fn list_all(&self) -> Result<Vec<ProductCatalogEntry>, ProductRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| {
                map_pool_error(err, |message| ProductRepositoryError::connection(message))
            })?;
        let rows = products::table
            .order(products::id.asc())
            .select(ProductRow::as_select())
            .load::<ProductRow>(&mut conn)
            .await
            .map_err(query_error)?;
        rows.into_iter().map(into_entry).collect()
    }

    async fn find_by_id(
        &self,
        id: ProductId,
    ) -> Result<Option<ProductCatalogEntry>, ProductRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| {
                map_pool_error(err, |message| ProductRepositoryError::connection(message))
            })?;
        let row = products::table
            .filter(products::id.eq(id.get()))
            .select(ProductRow::as_select())
            .first::<ProductRow>(&mut conn)
            .await
            .optional()
            .map_err(query_error)?;
        row.map(into_entry).transpose()
    }
}
