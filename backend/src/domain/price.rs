//! Monetary amounts and their display form.
//!
//! Prices are held as non-negative integer minor units (hundredths) so two
//! fractional digits survive storage without floating point.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const MINOR_PER_UNIT: i64 = 100;

/// Validation failures for [`Price`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PriceError {
    #[error("price must not be negative")]
    Negative,
    #[error("price exceeds the supported range")]
    Overflow,
    #[error("price `{0}` is not a decimal number with at most two fractional digits")]
    Malformed(String),
}

/// Non-negative price in minor units.
///
/// Serialises as a decimal string with two fractional digits, for example
/// `"1200000.00"`.
///
/// # Examples
/// ```
/// use storefront::domain::Price;
///
/// let price: Price = "999.50".parse().expect("valid price");
/// assert_eq!(price.minor_units(), 99_950);
/// ```
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
#[serde(try_from = "String", into = "String")]
#[schema(value_type = String, example = "1200000.00")]
pub struct Price(i64);

impl Price {
    /// Zero price.
    pub const ZERO: Self = Self(0);

    /// Build from minor units (hundredths).
    pub fn from_minor_units(minor: i64) -> Result<Self, PriceError> {
        if minor < 0 {
            return Err(PriceError::Negative);
        }
        Ok(Self(minor))
    }

    /// Build from whole currency units.
    pub fn from_units(units: i64) -> Result<Self, PriceError> {
        let minor = units.checked_mul(MINOR_PER_UNIT).ok_or(PriceError::Overflow)?;
        Self::from_minor_units(minor)
    }

    pub fn minor_units(self) -> i64 {
        self.0
    }

    /// Price multiplied by a unit count.
    pub fn checked_mul(self, count: u32) -> Result<Self, PriceError> {
        self.0
            .checked_mul(i64::from(count))
            .map(Self)
            .ok_or(PriceError::Overflow)
    }

    pub fn checked_add(self, other: Self) -> Result<Self, PriceError> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or(PriceError::Overflow)
    }

    /// Whole units after rounding half away from zero.
    pub fn rounded_units(self) -> i64 {
        // Non-negative by construction, so adding half a unit rounds away from zero.
        self.0 / MINOR_PER_UNIT + i64::from(self.0 % MINOR_PER_UNIT >= MINOR_PER_UNIT / 2)
    }
}

/// Render `price` as whole units with `.` as the thousands separator.
///
/// The fractional part is rounded half away from zero and never printed.
///
/// # Examples
/// ```
/// use storefront::domain::{format_price, Price};
///
/// let price = Price::from_units(1_200_000).expect("valid price");
/// assert_eq!(format_price(price), "1.200.000");
/// ```
pub fn format_price(price: Price) -> String {
    let digits = price.rounded_units().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push('.');
        }
        out.push(digit);
    }
    out
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:02}",
            self.0 / MINOR_PER_UNIT,
            self.0 % MINOR_PER_UNIT
        )
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let malformed = || PriceError::Malformed(s.to_owned());
        if raw.starts_with('-') {
            return Err(PriceError::Negative);
        }
        let (whole, fraction) = match raw.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (raw, ""),
        };
        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if whole.is_empty() || !all_digits(whole) || !all_digits(fraction) || fraction.len() > 2 {
            return Err(malformed());
        }
        let units: i64 = whole.parse().map_err(|_| PriceError::Overflow)?;
        let cents = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| malformed())? * 10,
            _ => fraction.parse::<i64>().map_err(|_| malformed())?,
        };
        let minor = units
            .checked_mul(MINOR_PER_UNIT)
            .and_then(|m| m.checked_add(cents))
            .ok_or(PriceError::Overflow)?;
        Self::from_minor_units(minor)
    }
}

impl TryFrom<String> for Price {
    type Error = PriceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Price> for String {
    fn from(value: Price) -> Self {
        value.to_string()
    }
}
