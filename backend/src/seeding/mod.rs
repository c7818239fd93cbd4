//! Startup wiring for catalogue seeding.

mod config;
mod startup;

pub use config::CatalogSeedSettings;
pub use startup::{StartupSeedingError, seed_catalog_on_startup};
