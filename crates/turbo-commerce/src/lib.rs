//! Storefront domain types for TurboCommerce.
//!
//! The backend owns pricing, stock and discount rules; this crate holds the
//! shapes exchanged with it and the small client-side rules around them:
//!
//! - **Cart**: add/delete/update payloads and the server-computed summary
//! - **Catalog**: variant replies (tagged full/partial) and category cards
//! - **Promo**: code normalization and the apply-button state machine
//! - **Checkout**: payment input formatting, payment outcome, order numbers
//! - **Quantity**: quantity parsing and stepper bounds
//!
//! # Example
//!
//! ```rust,ignore
//! use turbo_commerce::prelude::*;
//!
//! let quantity = parse_quantity(&input_value)?;
//! let item = CartLineItem::new(Sku::new("TEE-M"), quantity, image_src)
//!     .with_attributes(selected);
//! let path = Endpoint::AddToCart { sku: &item.sku, quantity }.path();
//! ```

pub mod endpoints;
pub mod error;
pub mod ids;
pub mod price;
pub mod quantity;
pub mod wire;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod promo;

pub use endpoints::Endpoint;
pub use error::CommerceError;
pub use ids::*;
pub use price::{Price, DEFAULT_CURRENCY_SYMBOL};
pub use wire::{Attributes, ResponseStatus};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::endpoints::Endpoint;
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::price::{Price, DEFAULT_CURRENCY_SYMBOL};
    pub use crate::quantity::{parse_quantity, QuantityBounds, DEFAULT_MIN_QUANTITY};
    pub use crate::wire::{Attributes, ResponseStatus};

    // Cart
    pub use crate::cart::{
        AddToCartReply, CartLineItem, CartMutationReply, CartSummary, DeletePayload,
        SummaryText, UpdateQuantityPayload,
    };

    // Catalog
    pub use crate::catalog::{
        stock_text, FilterPayload, FilterReply, PartialVariant, ProductCard, ProductVariant,
        VariantPayload, VariantReply, VariantUpdate,
    };

    // Promo
    pub use crate::promo::{uppercase_as_typed, PromoCode, PromoPayload, PromoReply, PromoState};

    // Checkout
    pub use crate::checkout::{
        digits_only, format_card_number, format_expiry, OrderNumber, PaymentMethod,
        PaymentOutcome, PaymentProcessor, SimulatedProcessor,
    };
}
