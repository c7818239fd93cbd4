//! Backend entry-point: wires REST endpoints, startup seeding and OpenAPI docs.

mod server;

use std::net::SocketAddr;

use actix_web::web;
use mockable::{DefaultEnv, Env};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server, stock_rule_from_env};
use storefront::inbound::http::health::HealthState;
use storefront::inbound::http::session_config::{BuildMode, session_settings_from_env};
use storefront::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations_async};
use storefront::seeding::{CatalogSeedSettings, seed_catalog_on_startup};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let env = DefaultEnv::new();
    let session = session_settings_from_env(&env, BuildMode::from_debug_assertions())
        .map_err(std::io::Error::other)?;
    let stock_rule = stock_rule_from_env(&env).map_err(std::io::Error::other)?;
    let bind_addr = bind_addr_from_env(&env)?;

    let db_pool = match env.string("DATABASE_URL") {
        Some(url) => Some(connect(url).await?),
        None => {
            warn!("DATABASE_URL not set; persistence adapters disabled");
            None
        }
    };

    let seed_settings = CatalogSeedSettings::load()
        .map_err(|err| std::io::Error::other(format!("catalogue seed settings: {err}")))?;
    seed_catalog_on_startup(&seed_settings, db_pool.as_ref())
        .await
        .map_err(std::io::Error::other)?;

    let mut config = ServerConfig::new(session, bind_addr).with_stock_rule(stock_rule);
    if let Some(pool) = db_pool {
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    info!(%bind_addr, "storefront listening");
    health_state.mark_ready();
    server.await
}

fn bind_addr_from_env<E: Env>(env: &E) -> std::io::Result<SocketAddr> {
    let raw = env
        .string("BIND_ADDR")
        .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
    raw.parse().map_err(|err| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("invalid BIND_ADDR '{raw}': {err}"),
        )
    })
}

async fn connect(database_url: String) -> std::io::Result<DbPool> {
    run_pending_migrations_async(database_url.clone())
        .await
        .map_err(std::io::Error::other)?;
    DbPool::new(PoolConfig::new(database_url))
        .await
        .map_err(|err| std::io::Error::other(err.into_message()))
}
