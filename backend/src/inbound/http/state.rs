//! Shared HTTP adapter state.
//!
//! Handlers and the access gate receive this through `web::Data` and only
//! depend on driving ports, so they can be exercised without I/O.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};

use crate::domain::ports::{
    CatalogQuery, DashboardQuery, FixtureProductRepository, FixtureUserRepository,
    ProductRepository, UserContextQuery, UserRepository,
};
use crate::domain::{CatalogService, StockRule, UserContextService};

/// Driving ports used by the HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub catalog: Arc<dyn CatalogQuery>,
    pub dashboard: Arc<dyn DashboardQuery>,
    pub user_context: Arc<dyn UserContextQuery>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub catalog: Arc<dyn CatalogQuery>,
    pub dashboard: Arc<dyn DashboardQuery>,
    pub user_context: Arc<dyn UserContextQuery>,
    /// Rule used to label stock in listings; matches the dashboard service.
    pub stock_rule: StockRule,
    pub clock: Arc<dyn Clock + Send + Sync>,
}

impl HttpState {
    pub fn new(ports: HttpStatePorts, stock_rule: StockRule) -> Self {
        let HttpStatePorts {
            catalog,
            dashboard,
            user_context,
        } = ports;
        Self {
            catalog,
            dashboard,
            user_context,
            stock_rule,
            clock: Arc::new(DefaultClock),
        }
    }

    /// Wire the catalogue and user services over the given repositories.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use storefront::domain::StockRule;
    /// use storefront::domain::ports::{FixtureProductRepository, FixtureUserRepository};
    /// use storefront::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::from_repositories(
    ///     Arc::new(FixtureProductRepository),
    ///     Arc::new(FixtureUserRepository),
    ///     StockRule::default(),
    /// );
    /// assert_eq!(state.stock_rule, StockRule::default());
    /// ```
    pub fn from_repositories<P, U>(products: Arc<P>, users: Arc<U>, stock_rule: StockRule) -> Self
    where
        P: ProductRepository + 'static,
        U: UserRepository + 'static,
    {
        let catalog = Arc::new(CatalogService::new(products, stock_rule));
        Self::new(
            HttpStatePorts {
                catalog: catalog.clone(),
                dashboard: catalog,
                user_context: Arc::new(UserContextService::new(users)),
            },
            stock_rule,
        )
    }

    /// In-memory state used when no database is configured.
    pub fn fixtures(stock_rule: StockRule) -> Self {
        Self::from_repositories(
            Arc::new(FixtureProductRepository),
            Arc::new(FixtureUserRepository),
            stock_rule,
        )
    }

    /// Replace the clock stamping dashboard responses.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        self.clock = clock;
        self
    }
}
