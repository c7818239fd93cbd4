//! Product catalogue handlers.
//!
//! ```text
//! GET /api/v1/products
//! GET /api/v1/products/{id}
//! ```

use actix_web::{HttpResponse, get, web};
use serde::Serialize;
use utoipa::ToSchema;

use super::cache_control::private_no_cache_header;
use super::current_user::CurrentUser;
use super::state::HttpState;
use crate::domain::{
    ApiResult, Category, Error, Price, ProductCatalogEntry, ProductId, ProductName, Quantity,
    StockRule, StockStatus, StockTone,
};

/// Stock badge rendered next to each product.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockStatusDto {
    pub code: StockStatus,
    #[schema(example = "In Stock")]
    pub label: &'static str,
    pub tone: StockTone,
    #[schema(example = "text-green-500 bg-green-100")]
    pub css_class: &'static str,
}

impl From<StockStatus> for StockStatusDto {
    fn from(status: StockStatus) -> Self {
        Self {
            code: status,
            label: status.label(),
            tone: status.tone(),
            css_class: status.css_class(),
        }
    }
}

/// Catalogue entry with its derived display values.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: ProductId,
    pub name: ProductName,
    pub category: Category,
    pub price: Price,
    #[schema(example = "1.200.000")]
    pub formatted_price: String,
    pub quantity_on_hand: Quantity,
    pub stock_status: StockStatusDto,
}

impl ProductDto {
    pub fn from_entry(entry: &ProductCatalogEntry, rule: StockRule) -> Self {
        Self {
            id: entry.id(),
            name: entry.name().clone(),
            category: entry.category().clone(),
            price: entry.price(),
            formatted_price: entry.formatted_price(),
            quantity_on_hand: entry.quantity_on_hand(),
            stock_status: entry.stock_status(rule).into(),
        }
    }
}

/// List the whole catalogue.
#[utoipa::path(
    get,
    path = "/api/v1/products",
    responses(
        (status = 200, description = "Catalogue entries ordered by id", body = [ProductDto]),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 503, description = "Catalogue unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["products"],
    operation_id = "listProducts"
)]
#[get("/products")]
pub async fn list_products(
    state: web::Data<HttpState>,
    _user: CurrentUser,
) -> ApiResult<HttpResponse> {
    let entries = state.catalog.list_entries().await?;
    let body: Vec<ProductDto> = entries
        .iter()
        .map(|entry| ProductDto::from_entry(entry, state.stock_rule))
        .collect();
    Ok(HttpResponse::Ok()
        .insert_header(private_no_cache_header())
        .json(body))
}

/// Fetch one product.
#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Catalogue entry", body = ProductDto),
        (status = 400, description = "Invalid product id", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "Unknown product", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["products"],
    operation_id = "getProduct"
)]
#[get("/products/{id}")]
pub async fn get_product(
    state: web::Data<HttpState>,
    _user: CurrentUser,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let raw = path.into_inner();
    let id = ProductId::new(raw).map_err(|err| {
        Error::invalid_request(err.to_string())
            .with_details(serde_json::json!({ "field": "id", "value": raw }))
    })?;
    let entry = state.catalog.find_entry(id).await?;
    Ok(HttpResponse::Ok()
        .insert_header(private_no_cache_header())
        .json(ProductDto::from_entry(&entry, state.stock_rule)))
}
