//! Price values as sent by the backend.
//!
//! The backend owns all arithmetic. Prices arrive as decimals (JSON strings
//! such as `"120.00"` or plain numbers) and are only ever displayed, so the
//! decimal keeps the scale the server chose.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Symbol prefixed to every displayed amount unless configured otherwise.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// A monetary amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Wrap a decimal amount.
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// A zero price.
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// The underlying amount.
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Format with a currency symbol, e.g. `$49.99`.
    pub fn display_with(&self, symbol: &str) -> String {
        format!("{}{}", symbol, self.0)
    }

    /// Format as an old (struck-through) price: blank when zero.
    ///
    /// The backend uses `0` to mean "no previous price".
    pub fn display_old_with(&self, symbol: &str) -> String {
        if self.is_zero() {
            String::new()
        } else {
            self.display_with(symbol)
        }
    }
}

impl FromStr for Price {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim()).map(Self)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_with(DEFAULT_CURRENCY_SYMBOL))
    }
}
