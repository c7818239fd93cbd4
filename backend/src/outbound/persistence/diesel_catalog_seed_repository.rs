//! PostgreSQL-backed catalogue seeding adapter.
//!
//! Wipes `products` then `users` and inserts the seed rows in one
//! transaction, so a failed run leaves the previous data in place.

use async_trait::async_trait;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use tracing::debug;

use crate::domain::ports::{
    CatalogSeedOutcome, CatalogSeedRepository, CatalogSeedRepositoryError, CatalogSeedRequest,
};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewProductRow, NewUserRow};
use super::pool::DbPool;
use super::schema::{products, users};

/// Diesel-backed implementation of [`CatalogSeedRepository`].
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use storefront::domain::CatalogSeeder;
/// use storefront::outbound::persistence::{DbPool, DieselCatalogSeedRepository, PoolConfig};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = DbPool::new(PoolConfig::new("postgres://localhost/storefront")).await?;
/// let seeder = CatalogSeeder::new(Arc::new(DieselCatalogSeedRepository::new(pool)));
/// let outcome = seeder.seed().await?;
/// assert_eq!(outcome.products_inserted, 6);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct DieselCatalogSeedRepository {
    pool: DbPool,
}

impl DieselCatalogSeedRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogSeedRepository for DieselCatalogSeedRepository {
    async fn reset_and_seed(
        &self,
        request: CatalogSeedRequest,
    ) -> Result<CatalogSeedOutcome, CatalogSeedRepositoryError> {
        let CatalogSeedRequest { user, products } = request;
        let user_row = NewUserRow::from(&user);
        let product_rows = products
            .iter()
            .map(NewProductRow::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|message| CatalogSeedRepositoryError::query(message))?;

        let mut conn = self.pool.get().await.map_err(|err| {
            map_pool_error(err, |message| CatalogSeedRepositoryError::connection(message))
        })?;

        conn.transaction(|conn| {
            async move {
                let products_deleted = diesel::delete(products::table).execute(conn).await?;
                let users_deleted = diesel::delete(users::table).execute(conn).await?;
                debug!(products_deleted, users_deleted, "cleared catalogue tables");

                let users_inserted = diesel::insert_into(users::table)
                    .values(&user_row)
                    .execute(conn)
                    .await?;
                let products_inserted = if product_rows.is_empty() {
                    0
                } else {
                    diesel::insert_into(products::table)
                        .values(&product_rows)
                        .execute(conn)
                        .await?
                };

                Ok(CatalogSeedOutcome {
                    users_inserted,
                    products_inserted,
                })
            }
            .scope_boxed()
        })
        .await
        .map_err(|err| {
            map_diesel_error(
                err,
                |message| CatalogSeedRepositoryError::query(message),
                |message| CatalogSeedRepositoryError::connection(message),
            )
        })
    }
}
