//! PostgreSQL persistence adapters using Diesel.
//!
//! Repositories only translate between Diesel rows and domain types. Row
//! structs (`models`) and the table definitions (`schema`) stay private to
//! this module; every database failure is mapped onto the owning port's
//! error enum.
//!
//! # Example
//!
//! ```rust,no_run
//! use storefront::outbound::persistence::{DbPool, DieselProductRepository, PoolConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/storefront")).await?;
//! let _products = DieselProductRepository::new(pool);
//! # Ok(())
//! # }
//! ```

mod diesel_catalog_seed_repository;
mod diesel_product_repository;
mod diesel_user_repository;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_catalog_seed_repository::DieselCatalogSeedRepository;
pub use diesel_product_repository::DieselProductRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_pending_migrations, run_pending_migrations_async};
pub use pool::{DbPool, PoolConfig, PoolError};
