//! Backend endpoint paths.
//!
//! Cart paths are rooted at `/cart/`; the catalog, variant and promo paths are
//! relative to the current page, as the backend mounts them under the page's
//! own route.

use crate::ids::{CategoryName, Sku};

fn segment(s: &str) -> String {
    urlencoding::encode(s).into_owned()
}

/// One backend endpoint with its path parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint<'a> {
    AddToCart { sku: &'a Sku, quantity: u32 },
    DeleteFromCart { sku: &'a Sku },
    UpdateQuantity { sku: &'a Sku, quantity: u32 },
    FilterCategory { category: &'a CategoryName },
    UpdateVariant { sku: &'a Sku },
    VerifyPromo { code: &'a str },
}

impl Endpoint<'_> {
    /// Request path, with every parameter percent-encoded.
    pub fn path(&self) -> String {
        match self {
            Endpoint::AddToCart { sku, quantity } => {
                format!("/cart/add/{}/{}", segment(sku.as_str()), quantity)
            }
            Endpoint::DeleteFromCart { sku } => format!("/cart/delete/{}", segment(sku.as_str())),
            Endpoint::UpdateQuantity { sku, quantity } => {
                format!("/cart/update-quantity/{}&{}", segment(sku.as_str()), quantity)
            }
            Endpoint::FilterCategory { category } => {
                format!("filter-category/{}", segment(category.as_str()))
            }
            Endpoint::UpdateVariant { sku } => format!("update-variant/{}", segment(sku.as_str())),
            Endpoint::VerifyPromo { code } => format!("promo-code/verify/{}", segment(code)),
        }
    }

    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::AddToCart { .. } => "cart-add",
            Endpoint::DeleteFromCart { .. } => "cart-delete",
            Endpoint::UpdateQuantity { .. } => "cart-update-quantity",
            Endpoint::FilterCategory { .. } => "filter-category",
            Endpoint::UpdateVariant { .. } => "update-variant",
            Endpoint::VerifyPromo { .. } => "promo-verify",
        }
    }
}
