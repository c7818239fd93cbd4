//! Stock classification.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::product::Quantity;

/// Quantity at or below which positive stock counts as low.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 2;

/// Availability bucket derived from the quantity on hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    Available,
    LowStock,
    OutOfStock,
}

/// Visual tone associated with a [`StockStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StockTone {
    Positive,
    Warning,
    Negative,
}

impl StockStatus {
    /// Stable machine-readable code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::LowStock => "low_stock",
            Self::OutOfStock => "out_of_stock",
        }
    }

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Available => "In Stock",
            Self::LowStock => "Low Stock",
            Self::OutOfStock => "Out of Stock",
        }
    }

    pub const fn tone(self) -> StockTone {
        match self {
            Self::Available => StockTone::Positive,
            Self::LowStock => StockTone::Warning,
            Self::OutOfStock => StockTone::Negative,
        }
    }

    /// Utility classes used by the storefront's product table badges.
    pub const fn css_class(self) -> &'static str {
        match self.tone() {
            StockTone::Positive => "text-green-500 bg-green-100",
            StockTone::Warning => "text-yellow-500 bg-yellow-100",
            StockTone::Negative => "text-red-500 bg-red-100",
        }
    }
}

/// Rule mapping a quantity to a [`StockStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "rule")]
pub enum StockRule {
    /// Legacy ordering: any positive quantity is available and every other
    /// quantity is low stock. Out of stock is unreachable.
    Literal,
    /// Zero is out of stock, `1..=threshold` is low stock, anything above is
    /// available.
    LowStockThreshold { threshold: u32 },
}

impl Default for StockRule {
    fn default() -> Self {
        Self::LowStockThreshold {
            threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl StockRule {
    pub fn classify(self, quantity: Quantity) -> StockStatus {
        let quantity = quantity.get();
        match self {
            Self::Literal => {
                if quantity > 0 {
                    StockStatus::Available
                } else if quantity <= DEFAULT_LOW_STOCK_THRESHOLD {
                    StockStatus::LowStock
                } else {
                    StockStatus::OutOfStock
                }
            }
            Self::LowStockThreshold { threshold } => match quantity {
                0 => StockStatus::OutOfStock,
                q if q <= threshold => StockStatus::LowStock,
                _ => StockStatus::Available,
            },
        }
    }
}

/// Classify `quantity` with the default rule.
///
/// # Examples
/// ```
/// use storefront::domain::{classify_stock, Quantity, StockStatus};
///
/// assert_eq!(classify_stock(Quantity::new(0)), StockStatus::OutOfStock);
/// assert_eq!(classify_stock(Quantity::new(5)), StockStatus::Available);
/// ```
pub fn classify_stock(quantity: Quantity) -> StockStatus {
    StockRule::default().classify(quantity)
}
