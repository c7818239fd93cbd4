//! Builders for HTTP adapter state.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use storefront::inbound::http::state::HttpState;
use storefront::outbound::persistence::{DieselProductRepository, DieselUserRepository};

use super::ServerConfig;

/// Choose Diesel-backed repositories when a pool is configured and fixtures
/// otherwise.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => HttpState::from_repositories(
            Arc::new(DieselProductRepository::new(pool.clone())),
            Arc::new(DieselUserRepository::new(pool.clone())),
            config.stock_rule,
        ),
        None => {
            info!("no database configured; serving fixture catalogue");
            HttpState::fixtures(config.stock_rule)
        }
    };
    web::Data::new(state)
}
