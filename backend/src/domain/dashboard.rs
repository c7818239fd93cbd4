//! Aggregate inventory figures shown on the admin dashboard.

use super::price::{Price, PriceError, format_price};
use super::product::ProductCatalogEntry;
use super::stock::{StockRule, StockStatus};

/// Totals computed over a set of catalogue entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InventorySummary {
    pub entry_count: usize,
    pub units_on_hand: u64,
    pub available: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
    pub stock_value: Price,
}

impl InventorySummary {
    /// Summarise `entries`, classifying each with `rule`.
    ///
    /// Fails only when the stock value exceeds the representable range.
    ///
    /// # Examples
    /// ```
    /// use storefront::domain::{InventorySummary, StockRule};
    ///
    /// let summary = InventorySummary::from_entries(&[], StockRule::default())
    ///     .expect("empty catalogue");
    /// assert_eq!(summary.entry_count, 0);
    /// assert_eq!(summary.formatted_stock_value(), "0");
    /// ```
    pub fn from_entries(
        entries: &[ProductCatalogEntry],
        rule: StockRule,
    ) -> Result<Self, PriceError> {
        entries.iter().try_fold(Self::default(), |mut acc, entry| {
            let quantity = entry.quantity_on_hand();
            acc.entry_count += 1;
            acc.units_on_hand += u64::from(quantity.get());
            match entry.stock_status(rule) {
                StockStatus::Available => acc.available += 1,
                StockStatus::LowStock => acc.low_stock += 1,
                StockStatus::OutOfStock => acc.out_of_stock += 1,
            }
            let line_value = entry.price().checked_mul(quantity.get())?;
            acc.stock_value = acc.stock_value.checked_add(line_value)?;
            Ok(acc)
        })
    }

    pub fn formatted_stock_value(&self) -> String {
        format_price(self.stock_value)
    }
}
