//! Admin dashboard handler.
//!
//! Mounted inside the admin scope, which is wrapped by
//! [`AccessGate`](crate::middleware::access_gate::AccessGate) requiring
//! [`Role::Admin`](crate::domain::Role::Admin).

use actix_web::{HttpResponse, get, web};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::cache_control::private_no_cache_header;
use super::current_user::CurrentUser;
use super::state::HttpState;
use crate::domain::{ApiResult, Error, InventorySummary, Price};

/// Inventory figures shown on the dashboard.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardDto {
    pub entry_count: usize,
    pub units_on_hand: u64,
    pub available: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
    pub stock_value: Price,
    #[schema(example = "63.500.000")]
    pub formatted_stock_value: String,
    pub generated_at: DateTime<Utc>,
}

impl DashboardDto {
    pub fn new(summary: &InventorySummary, generated_at: DateTime<Utc>) -> Self {
        Self {
            entry_count: summary.entry_count,
            units_on_hand: summary.units_on_hand,
            available: summary.available,
            low_stock: summary.low_stock,
            out_of_stock: summary.out_of_stock,
            stock_value: summary.stock_value,
            formatted_stock_value: summary.formatted_stock_value(),
            generated_at,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/dashboard",
    responses(
        (status = 200, description = "Inventory summary", body = DashboardDto),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Caller is not an administrator", body = Error),
        (status = 503, description = "Catalogue unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "getDashboard"
)]
#[get("/dashboard")]
pub async fn dashboard(
    state: web::Data<HttpState>,
    _user: CurrentUser,
) -> ApiResult<HttpResponse> {
    let summary = state.dashboard.inventory_summary().await?;
    Ok(HttpResponse::Ok()
        .insert_header(private_no_cache_header())
        .json(DashboardDto::new(&summary, state.clock.utc())))
}
