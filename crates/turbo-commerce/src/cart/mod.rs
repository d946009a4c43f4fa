//! Shopping cart module.
//!
//! Contains the add-to-cart line item, the server-computed summary and the
//! replies of the cart endpoints.

mod line_item;
mod summary;

pub use line_item::{CartLineItem, DeletePayload, UpdateQuantityPayload};
pub use summary::{AddToCartReply, CartMutationReply, CartSummary, SummaryText};
