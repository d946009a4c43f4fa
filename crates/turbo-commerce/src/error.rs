//! Commerce error types.

use thiserror::Error;

/// Validation and business errors raised on the client side.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Quantity resolved to zero.
    #[error("Product quantity could not be 0")]
    ZeroQuantity,

    /// Quantity input is not a non-negative integer.
    #[error("Invalid quantity: {0:?}")]
    InvalidQuantity(String),

    /// Promo code is empty after trimming.
    #[error("Please enter a promo code")]
    EmptyPromoCode,

    /// The server answered with a non-success status.
    #[error("Rejected by server: {0}")]
    Rejected(String),

    /// Invalid state machine transition.
    #[error("Invalid transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
