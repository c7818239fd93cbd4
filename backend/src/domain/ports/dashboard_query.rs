//! Driving port for the admin dashboard.

use async_trait::async_trait;

use crate::domain::{Error, InventorySummary};

#[async_trait]
pub trait DashboardQuery: Send + Sync {
    /// Aggregate figures over the whole catalogue.
    async fn inventory_summary(&self) -> Result<InventorySummary, Error>;
}
