//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::time::Duration;

use actix_web::cookie::{Key, SameSite};
use mockable::Env;
use storefront::domain::StockRule;
use storefront::inbound::http::session_config::SessionSettings;
use storefront::outbound::persistence::DbPool;

pub const STOCK_RULE_ENV: &str = "STOCK_RULE";
pub const LOW_STOCK_THRESHOLD_ENV: &str = "STOCK_LOW_THRESHOLD";

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) session_ttl: Duration,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) stock_rule: StockRule,
}

impl ServerConfig {
    /// Construct a server configuration from validated session settings.
    #[must_use]
    pub fn new(session: SessionSettings, bind_addr: SocketAddr) -> Self {
        let SessionSettings {
            key,
            cookie_secure,
            same_site,
            ttl,
        } = session;
        Self {
            key,
            cookie_secure,
            same_site,
            session_ttl: ttl,
            bind_addr,
            db_pool: None,
            stock_rule: StockRule::default(),
        }
    }

    /// Attach a database connection pool for persistence adapters.
    ///
    /// Without one the server serves the fixture catalogue and treats every
    /// session as anonymous.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    #[must_use]
    pub fn with_stock_rule(mut self, rule: StockRule) -> Self {
        self.stock_rule = rule;
        self
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

/// Errors raised while reading the stock rule from the environment.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StockRuleConfigError {
    #[error("invalid value for STOCK_RULE='{0}'; expected literal|threshold")]
    UnknownRule(String),
    #[error("invalid value for STOCK_LOW_THRESHOLD='{0}'; expected a whole number")]
    InvalidThreshold(String),
}

/// Read the stock classification rule.
///
/// `STOCK_RULE=literal` selects the legacy ordering. Anything else uses the
/// threshold rule, with `STOCK_LOW_THRESHOLD` overriding the default of 2.
pub fn stock_rule_from_env<E: Env>(env: &E) -> Result<StockRule, StockRuleConfigError> {
    let rule = env.string(STOCK_RULE_ENV);
    match rule.as_deref().map(str::trim) {
        None | Some("") | Some("threshold") => {}
        Some("literal") => return Ok(StockRule::Literal),
        Some(other) => return Err(StockRuleConfigError::UnknownRule(other.to_owned())),
    }
    let Some(raw) = env.string(LOW_STOCK_THRESHOLD_ENV) else {
        return Ok(StockRule::default());
    };
    raw.trim()
        .parse::<u32>()
        .map(|threshold| StockRule::LowStockThreshold { threshold })
        .map_err(|_| StockRuleConfigError::InvalidThreshold(raw))
}
