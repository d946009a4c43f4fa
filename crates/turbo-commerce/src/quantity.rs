//! Quantity input parsing and stepper bounds.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Lowest quantity the stepper goes down to unless configured otherwise.
pub const DEFAULT_MIN_QUANTITY: u32 = 1;

/// Parse a quantity input value for add-to-cart.
///
/// Surrounding whitespace is ignored. Zero and anything that is not a
/// non-negative integer are rejected before any request is built.
pub fn parse_quantity(input: &str) -> Result<u32, CommerceError> {
    let trimmed = input.trim();
    let quantity: u32 = trimmed
        .parse()
        .map_err(|_| CommerceError::InvalidQuantity(trimmed.to_string()))?;
    if quantity == 0 {
        return Err(CommerceError::ZeroQuantity);
    }
    Ok(quantity)
}

/// Inclusive bounds for a quantity stepper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityBounds {
    pub min: u32,
    /// Available stock.
    pub max: u32,
}

impl QuantityBounds {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// One step up, or `None` when already at (or above) the ceiling.
    pub fn step_up(&self, current: u32) -> Option<u32> {
        if current >= self.max {
            None
        } else {
            Some(current + 1)
        }
    }

    /// One step down, or `None` when already at (or below) the floor.
    pub fn step_down(&self, current: u32) -> Option<u32> {
        if current <= self.min {
            None
        } else {
            Some(current - 1)
        }
    }

    /// Clamp into `[min, max]`. An empty range (no stock) clamps to `min`.
    pub fn clamp(&self, quantity: u32) -> u32 {
        quantity.min(self.max).max(self.min)
    }
}
