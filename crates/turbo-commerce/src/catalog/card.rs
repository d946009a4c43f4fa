//! Category grid records.

use crate::ids::CategoryName;
use crate::price::Price;
use crate::wire::ResponseStatus;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One product in the category grid.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProductCard {
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub price: Price,
    #[serde(default)]
    pub old_price: Price,
    /// Discount in percent; zero means no badge.
    #[serde(default)]
    pub discount: Decimal,
    #[serde(default, rename = "product-url")]
    pub product_url: String,
}

impl ProductCard {
    /// Badge text such as `-10%`, if the product is discounted.
    pub fn discount_badge(&self) -> Option<String> {
        if self.discount > Decimal::ZERO {
            Some(format!("-{}%", self.discount.normalize()))
        } else {
            None
        }
    }

    pub fn has_old_price(&self) -> bool {
        self.old_price.is_positive()
    }
}

/// Body of the `filter-category/{category}` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterPayload<'a> {
    pub category: &'a CategoryName,
}

/// Reply of `filter-category/{category}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct FilterReply {
    #[serde(default)]
    pub status: ResponseStatus,
    #[serde(default)]
    pub products: Vec<ProductCard>,
    #[serde(default)]
    pub message: Option<String>,
}
