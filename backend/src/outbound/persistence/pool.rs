//! bb8 pool of `diesel-async` PostgreSQL connections.

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};

/// Errors raised while building the pool or checking out a connection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    #[error("failed to get connection from pool: {message}")]
    Checkout { message: String },
    #[error("failed to build connection pool: {message}")]
    Build { message: String },
}

impl PoolError {
    pub fn checkout(message: impl Into<String>) -> Self {
        Self::Checkout {
            message: message.into(),
        }
    }

    pub fn build(message: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
        }
    }

    /// Underlying diagnostic, whichever variant carries it.
    pub fn into_message(self) -> String {
        match self {
            Self::Checkout { message } | Self::Build { message } => message,
        }
    }
}

const DEFAULT_MAX_SIZE: u32 = 10;
const DEFAULT_MIN_IDLE: u32 = 2;
const DEFAULT_CONNECTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Pool settings.
///
/// Defaults: 10 connections, 2 kept idle, 30 second checkout timeout.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use storefront::outbound::persistence::PoolConfig;
///
/// let config = PoolConfig::new("postgres://localhost/storefront")
///     .with_max_size(4)
///     .with_connection_timeout(Duration::from_secs(5));
/// assert_eq!(config.max_size(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
    min_idle: Option<u32>,
    connection_timeout: Duration,
}

impl PoolConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: DEFAULT_MAX_SIZE,
            min_idle: Some(DEFAULT_MIN_IDLE),
            connection_timeout: DEFAULT_CONNECTION_TIMEOUT,
        }
    }

    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn with_min_idle(mut self, min_idle: Option<u32>) -> Self {
        self.min_idle = min_idle;
        self
    }

    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn max_size(&self) -> u32 {
        self.max_size
    }

    pub fn min_idle(&self) -> Option<u32> {
        self.min_idle
    }

    pub fn connection_timeout(&self) -> Duration {
        self.connection_timeout
    }
}

/// Shared connection pool. Cloning shares the underlying pool.
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<AsyncPgConnection>,
}

impl DbPool {
    /// Build the pool.
    ///
    /// # Errors
    ///
    /// [`PoolError::Build`] when the manager cannot establish the initial
    /// idle connections.
    pub async fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(config.database_url());
        let inner = Pool::builder()
            .max_size(config.max_size)
            .min_idle(config.min_idle)
            .connection_timeout(config.connection_timeout)
            .build(manager)
            .await
            .map_err(|err| PoolError::build(err.to_string()))?;
        Ok(Self { inner })
    }

    /// Check out a connection.
    ///
    /// # Errors
    ///
    /// [`PoolError::Checkout`] when no connection frees up before the timeout.
    pub async fn get(&self) -> Result<PooledConnection<'_, AsyncPgConnection>, PoolError> {
        self.inner
            .get()
            .await
            .map_err(|err| PoolError::checkout(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn defaults() {
        let config = PoolConfig::new("postgres://localhost/storefront");
        assert_eq!(config.database_url(), "postgres://localhost/storefront");
        assert_eq!(config.max_size(), 10);
        assert_eq!(config.min_idle(), Some(2));
        assert_eq!(config.connection_timeout(), Duration::from_secs(30));
    }

    #[rstest]
    fn builders_override_defaults() {
        let config = PoolConfig::new("postgres://localhost/storefront")
            .with_max_size(3)
            .with_min_idle(None)
            .with_connection_timeout(Duration::from_secs(2));
        assert_eq!(config.max_size(), 3);
        assert_eq!(config.min_idle(), None);
        assert_eq!(config.connection_timeout(), Duration::from_secs(2));
    }

    #[rstest]
    #[case(PoolError::checkout("refused"), "refused")]
    #[case(PoolError::build("bad url"), "bad url")]
    fn errors_keep_their_message(#[case] error: PoolError, #[case] message: &str) {
        assert!(error.to_string().contains(message));
        assert_eq!(error.into_message(), message);
    }
}
