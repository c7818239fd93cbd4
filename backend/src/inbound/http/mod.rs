//! HTTP inbound adapter exposing REST endpoints.

pub mod cache_control;
pub mod current_user;
pub mod dashboard;
pub mod error;
pub mod health;
pub mod products;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;

use actix_web::web;

pub use current_user::CurrentUser;
pub use error::ApiResult;

use crate::domain::Role;
use crate::middleware::AccessGate;

/// Register the `/api/v1` routes on a scope that already has session
/// middleware applied.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use storefront::inbound::http::configure_api;
///
/// let _app = App::new().service(web::scope("/api/v1").configure(configure_api));
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(products::list_products)
        .service(products::get_product)
        .service(
            web::scope("/admin")
                .wrap(AccessGate::new(Role::Admin))
                .service(dashboard::dashboard),
        );
}
