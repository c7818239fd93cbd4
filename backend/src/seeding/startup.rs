//! Startup seeding orchestration.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::domain::ports::CatalogSeedOutcome;
use crate::domain::{CatalogSeeder, CatalogSeedingError};
use crate::outbound::persistence::{DbPool, DieselCatalogSeedRepository};
use crate::seeding::config::CatalogSeedSettings;

/// Errors returned while executing startup seeding.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    #[error("catalogue seeding error: {0}")]
    Seeding(#[from] CatalogSeedingError),
}

/// Reseed the catalogue on startup when enabled.
///
/// Returns `Ok(None)` when seeding is disabled or no database is configured.
///
/// # Examples
///
/// ```rust,no_run
/// use storefront::seeding::{CatalogSeedSettings, seed_catalog_on_startup};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = CatalogSeedSettings { enabled: false };
/// let outcome = seed_catalog_on_startup(&settings, None).await?;
/// assert!(outcome.is_none());
/// # Ok(())
/// # }
/// ```
pub async fn seed_catalog_on_startup(
    settings: &CatalogSeedSettings,
    db_pool: Option<&DbPool>,
) -> Result<Option<CatalogSeedOutcome>, StartupSeedingError> {
    if !settings.is_enabled() {
        info!(reason = "disabled", "catalogue seeding skipped");
        return Ok(None);
    }

    let Some(db_pool) = db_pool else {
        warn!("catalogue seeding enabled but DATABASE_URL is missing; skipping");
        return Ok(None);
    };

    let repository = DieselCatalogSeedRepository::new(db_pool.clone());
    let outcome = CatalogSeeder::new(Arc::new(repository)).seed().await?;
    Ok(Some(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(false)]
    #[case(true)]
    #[tokio::test]
    async fn skips_without_database(#[case] enabled: bool) {
        let settings = CatalogSeedSettings { enabled };
        let outcome = seed_catalog_on_startup(&settings, None)
            .await
            .expect("skipping never fails");
        assert!(outcome.is_none());
    }
}
