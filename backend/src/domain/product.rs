//! Product catalogue entries.
//!
//! Entries store only name, price, category and quantity. Stock status and
//! the display price are derived on demand and never persisted.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::price::{Price, format_price};
use super::stock::{StockRule, StockStatus};

/// Maximum length, in characters, of product names and categories.
pub const PRODUCT_TEXT_MAX: usize = 255;

/// Validation failures for product values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProductValidationError {
    #[error("product id must be positive")]
    NonPositiveId,
    #[error("product name must not be empty")]
    EmptyName,
    #[error("product name must be at most {max} characters")]
    NameTooLong { max: usize },
    #[error("category must not be empty")]
    EmptyCategory,
    #[error("category must be at most {max} characters")]
    CategoryTooLong { max: usize },
    #[error("quantity must not be negative")]
    NegativeQuantity,
}

/// Database identity of a stored product.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    pub fn new(id: i64) -> Result<Self, ProductValidationError> {
        if id <= 0 {
            return Err(ProductValidationError::NonPositiveId);
        }
        Ok(Self(id))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

fn bounded_text(
    raw: String,
    empty: ProductValidationError,
    too_long: ProductValidationError,
) -> Result<String, ProductValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(empty);
    }
    if trimmed.chars().count() > PRODUCT_TEXT_MAX {
        return Err(too_long);
    }
    Ok(trimmed.to_owned())
}

/// Trimmed, non-empty product name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
#[schema(value_type = String, example = "Ducky One 2 Mini")]
pub struct ProductName(String);

impl ProductName {
    pub fn new(name: impl Into<String>) -> Result<Self, ProductValidationError> {
        bounded_text(
            name.into(),
            ProductValidationError::EmptyName,
            ProductValidationError::NameTooLong {
                max: PRODUCT_TEXT_MAX,
            },
        )
        .map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProductName {
    type Error = ProductValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProductName> for String {
    fn from(value: ProductName) -> Self {
        value.0
    }
}

/// Free-form product category such as `Keyboard` or `Switch`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
#[schema(value_type = String, example = "Keyboard")]
pub struct Category(String);

impl Category {
    pub fn new(category: impl Into<String>) -> Result<Self, ProductValidationError> {
        bounded_text(
            category.into(),
            ProductValidationError::EmptyCategory,
            ProductValidationError::CategoryTooLong {
                max: PRODUCT_TEXT_MAX,
            },
        )
        .map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Category {
    type Error = ProductValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.0
    }
}

/// Units on hand. Unsigned, so negative stock cannot be represented.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    pub const fn new(units: u32) -> Self {
        Self(units)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<i32> for Quantity {
    type Error = ProductValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .map(Self)
            .map_err(|_| ProductValidationError::NegativeQuantity)
    }
}

/// Product that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: ProductName,
    pub price: Price,
    pub category: Category,
    pub quantity: Quantity,
}

impl NewProduct {
    /// Attach a stored identity.
    pub fn into_entry(self, id: ProductId) -> ProductCatalogEntry {
        let Self {
            name,
            price,
            category,
            quantity,
        } = self;
        ProductCatalogEntry {
            id,
            name,
            price,
            category,
            quantity,
        }
    }
}

/// One stored inventory item.
///
/// # Examples
/// ```
/// use storefront::domain::{
///     Category, NewProduct, Price, ProductId, ProductName, Quantity, StockRule, StockStatus,
/// };
///
/// let entry = NewProduct {
///     name: ProductName::new("Ducky One 2 Mini").expect("valid name"),
///     price: Price::from_units(1_200_000).expect("valid price"),
///     category: Category::new("Keyboard").expect("valid category"),
///     quantity: Quantity::new(15),
/// }
/// .into_entry(ProductId::new(1).expect("valid id"));
///
/// assert_eq!(entry.formatted_price(), "1.200.000");
/// assert_eq!(entry.stock_status(StockRule::default()), StockStatus::Available);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCatalogEntry {
    id: ProductId,
    name: ProductName,
    price: Price,
    category: Category,
    quantity: Quantity,
}

impl ProductCatalogEntry {
    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &ProductName {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn quantity_on_hand(&self) -> Quantity {
        self.quantity
    }

    pub fn stock_status(&self, rule: StockRule) -> StockStatus {
        rule.classify(self.quantity)
    }

    pub fn formatted_price(&self) -> String {
        format_price(self.price)
    }
}
