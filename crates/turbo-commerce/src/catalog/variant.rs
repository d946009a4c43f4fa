//! Variant switch wire types.
//!
//! The backend answers `update-variant/{sku}` with one flat object whose
//! `message` field says whether the SKU is a variant with its own attributes
//! (`"variant"`) or a base product (`"no-variant"`). The reply is decoded into
//! [`VariantUpdate`] here so the page never inspects raw JSON.

use crate::ids::Sku;
use crate::price::Price;
use crate::wire::{Attributes, ResponseStatus};
use serde::{Deserialize, Serialize};

/// `message` value announcing a full variant.
pub const FULL_VARIANT_MESSAGE: &str = "variant";

/// Stock line shown under the price.
pub fn stock_text(stock: u32) -> String {
    format!("In Stock - {} available", stock)
}

/// Body of the `update-variant/{sku}` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantPayload<'a> {
    #[serde(rename = "productSku")]
    pub product_sku: &'a Sku,
}

/// Raw `update-variant` reply.
///
/// The endpoint usually omits `status`; only an explicit non-success value
/// marks a refusal.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct VariantReply {
    #[serde(default)]
    pub status: Option<ResponseStatus>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub price: Price,
    #[serde(default)]
    pub old_price: Price,
    #[serde(default)]
    pub stock: u32,
    #[serde(default, rename = "image")]
    pub image_url: String,
    #[serde(default)]
    pub attributes: Attributes,
}

/// A purchasable configuration with its own attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductVariant {
    pub sku: Sku,
    pub title: String,
    pub price: Price,
    /// Zero means no previous price.
    pub old_price: Price,
    pub stock: u32,
    pub image_url: String,
    pub attributes: Attributes,
}

/// Base-product data: everything but the attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialVariant {
    pub sku: Sku,
    pub title: String,
    pub price: Price,
    pub old_price: Price,
    pub stock: u32,
    pub image_url: String,
}

/// Decoded variant reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantUpdate {
    Full(ProductVariant),
    Partial(PartialVariant),
}

impl VariantReply {
    /// Whether the backend explicitly refused the SKU.
    pub fn is_rejected(&self) -> bool {
        self.status.as_ref().is_some_and(|status| !status.is_success())
    }

    /// Tag the reply for `sku`.
    ///
    /// Only the exact message `"variant"` yields [`VariantUpdate::Full`];
    /// every other value is a base product.
    pub fn into_update(self, sku: Sku) -> VariantUpdate {
        if self.message == FULL_VARIANT_MESSAGE {
            VariantUpdate::Full(ProductVariant {
                sku,
                title: self.title,
                price: self.price,
                old_price: self.old_price,
                stock: self.stock,
                image_url: self.image_url,
                attributes: self.attributes,
            })
        } else {
            VariantUpdate::Partial(PartialVariant {
                sku,
                title: self.title,
                price: self.price,
                old_price: self.old_price,
                stock: self.stock,
                image_url: self.image_url,
            })
        }
    }
}

impl VariantUpdate {
    pub fn sku(&self) -> &Sku {
        match self {
            VariantUpdate::Full(v) => &v.sku,
            VariantUpdate::Partial(p) => &p.sku,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            VariantUpdate::Full(v) => &v.title,
            VariantUpdate::Partial(p) => &p.title,
        }
    }

    pub fn price(&self) -> Price {
        match self {
            VariantUpdate::Full(v) => v.price,
            VariantUpdate::Partial(p) => p.price,
        }
    }

    pub fn old_price(&self) -> Price {
        match self {
            VariantUpdate::Full(v) => v.old_price,
            VariantUpdate::Partial(p) => p.old_price,
        }
    }

    pub fn stock(&self) -> u32 {
        match self {
            VariantUpdate::Full(v) => v.stock,
            VariantUpdate::Partial(p) => p.stock,
        }
    }

    pub fn image_url(&self) -> &str {
        match self {
            VariantUpdate::Full(v) => &v.image_url,
            VariantUpdate::Partial(p) => &p.image_url,
        }
    }

    /// Attributes to list; a base product lists none.
    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            VariantUpdate::Full(v) => Some(&v.attributes),
            VariantUpdate::Partial(_) => None,
        }
    }

    pub fn is_full(&self) -> bool {
        matches!(self, VariantUpdate::Full(_))
    }
}
