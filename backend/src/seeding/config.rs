//! Catalogue seeding configuration loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Settings controlling whether the catalogue is reseeded at startup.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CATALOG_SEED")]
pub struct CatalogSeedSettings {
    /// Wipe and reseed users and products before the server binds.
    #[ortho_config(default = false)]
    pub enabled: bool,
}

impl CatalogSeedSettings {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}
