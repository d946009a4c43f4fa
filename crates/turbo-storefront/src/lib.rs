//! Storefront page scripts for TurboCommerce.
//!
//! Keeps the rendered page in step with the backend without reloads:
//!
//! - **Cart**: add to cart, remove a line, edit a line's quantity, steppers
//! - **Variant**: switch the product detail page to another SKU
//! - **Catalog**: rebuild the product grid for a category
//! - **Promo**: verify a promo code with an apply button that can't double-submit
//! - **Checkout**: payment input formatting, method selection, result modal
//! - **Profile**: preview a chosen profile picture
//!
//! Everything runs on one thread. The page is reached through the
//! [`Document`] trait and requests go out through a [`turbo_data::Transport`],
//! both owned by a [`PageContext`] that the [`EventController`] dispatches
//! into.
//!
//! # Example
//!
//! ```rust,ignore
//! use turbo_storefront::prelude::*;
//!
//! let config = StorefrontConfig::load("storefront.toml")?;
//! let ctx = PageContext::new(config, document, transport, logger)?;
//! let controller = EventController::new(ctx);
//!
//! match controller.dispatch(Event::SelectVariant { sku: "TEE-L".into() }).await {
//!     Outcome::Applied | Outcome::Discarded => {}
//!     other => eprintln!("variant switch: {:?}", other),
//! }
//! ```

pub mod config;
pub mod context;
pub mod controller;
pub mod dom;
pub mod error;
pub mod memory;
pub mod sections;
pub mod sync;

#[cfg(test)]
mod testing;

pub use config::{CsrfConfig, Messages, Selectors, StorefrontConfig};
pub use context::PageContext;
pub use controller::{Event, EventController, Outcome};
pub use dom::{AttributeRow, Document};
pub use error::SyncError;
pub use memory::{Element, MemoryDocument};
pub use sync::Effect;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::StorefrontConfig;
    pub use crate::context::PageContext;
    pub use crate::controller::{Event, EventController, Outcome};
    pub use crate::dom::{AttributeRow, Document};
    pub use crate::error::SyncError;
    pub use crate::memory::{Element, MemoryDocument};
    pub use crate::sync::cart::Step;
    pub use crate::sync::checkout::PaymentField;
    pub use crate::sync::Effect;
}
