//! Test utilities for the storefront crate.
//!
//! Compiled with the `test-support` feature so integration tests in `tests/`
//! can drive the HTTP stack and the seeder without PostgreSQL.

pub mod in_memory {
    //! Thread-safe in-memory store implementing the persistence ports.
    //!
    //! Product ids keep increasing across resets, mirroring a `BIGSERIAL`
    //! column after `DELETE`.

    use std::sync::{Mutex, MutexGuard};

    use async_trait::async_trait;

    use crate::domain::ports::{
        CatalogSeedOutcome, CatalogSeedRepository, CatalogSeedRepositoryError, CatalogSeedRequest,
        ProductRepository, ProductRepositoryError, UserPersistenceError, UserRepository,
    };
    use crate::domain::{ProductCatalogEntry, ProductId, User, UserId};

    #[derive(Debug)]
    struct Tables {
        users: Vec<User>,
        products: Vec<ProductCatalogEntry>,
        next_product_id: i64,
    }

    impl Default for Tables {
        fn default() -> Self {
            Self {
                users: Vec::new(),
                products: Vec::new(),
                next_product_id: 1,
            }
        }
    }

    /// Users and products held in memory.
    ///
    /// # Examples
    /// ```
    /// use storefront::test_support::in_memory::InMemoryCatalogStore;
    ///
    /// let store = InMemoryCatalogStore::default();
    /// assert_eq!(store.user_count(), 0);
    /// assert_eq!(store.product_count(), 0);
    /// ```
    #[derive(Debug, Default)]
    pub struct InMemoryCatalogStore {
        tables: Mutex<Tables>,
    }

    impl InMemoryCatalogStore {
        fn tables(&self) -> Result<MutexGuard<'_, Tables>, String> {
            self.tables
                .lock()
                .map_err(|_| "in-memory store lock poisoned".to_owned())
        }

        pub fn user_count(&self) -> usize {
            self.tables().map(|t| t.users.len()).unwrap_or_default()
        }

        pub fn product_count(&self) -> usize {
            self.tables().map(|t| t.products.len()).unwrap_or_default()
        }

        /// Snapshot of the stored users.
        pub fn users(&self) -> Vec<User> {
            self.tables().map(|t| t.users.clone()).unwrap_or_default()
        }
    }

    #[async_trait]
    impl UserRepository for InMemoryCatalogStore {
        async fn upsert(&self, user: &User) -> Result<(), UserPersistenceError> {
            let mut tables = self.tables().map_err(|message| UserPersistenceError::query(message))?;
            match tables.users.iter_mut().find(|u| u.id() == user.id()) {
                Some(existing) => *existing = user.clone(),
                None => tables.users.push(user.clone()),
            }
            Ok(())
        }

        async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
            let tables = self.tables().map_err(|message| UserPersistenceError::query(message))?;
            Ok(tables.users.iter().find(|u| u.id() == *id).cloned())
        }
    }

    #[async_trait]
    impl ProductRepository for InMemoryCatalogStore {
        async fn list_all(&self) -> Result<Vec<ProductCatalogEntry>, ProductRepositoryError> {
            let tables = self.tables().map_err(|message| ProductRepositoryError::query(message))?;
            Ok(tables.products.clone())
        }

        async fn find_by_id(
            &self,
            id: ProductId,
        ) -> Result<Option<ProductCatalogEntry>, ProductRepositoryError> {
            let tables = self.tables().map_err(|message| ProductRepositoryError::query(message))?;
            Ok(tables.products.iter().find(|p| p.id() == id).cloned())
        }
    }

    #[async_trait]
    impl CatalogSeedRepository for InMemoryCatalogStore {
        async fn reset_and_seed(
            &self,
            request: CatalogSeedRequest,
        ) -> Result<CatalogSeedOutcome, CatalogSeedRepositoryError> {
            let mut tables = self
                .tables()
                .map_err(|message| CatalogSeedRepositoryError::query(message))?;
            let CatalogSeedRequest { user, products } = request;

            let first_id = tables.next_product_id;
            let entries = products
                .into_iter()
                .zip(first_id..)
                .map(|(draft, raw)| {
                    ProductId::new(raw)
                        .map(|id| draft.into_entry(id))
                        .map_err(|err| CatalogSeedRepositoryError::query(err.to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?;

            tables.next_product_id = entries.last().map_or(first_id, |entry| entry.id().get() + 1);
            tables.products = entries;
            tables.users = vec![user];
            Ok(CatalogSeedOutcome {
                users_inserted: 1,
                products_inserted: tables.products.len(),
            })
        }
    }
}
