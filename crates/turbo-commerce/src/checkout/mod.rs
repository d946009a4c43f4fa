//! Checkout page: payment form input formatting and payment outcome.

mod form;
mod order;
mod payment;

pub use form::{digits_only, format_card_number, format_expiry};
pub use order::OrderNumber;
pub use payment::{
    PaymentMethod, PaymentOutcome, PaymentProcessor, SimulatedProcessor, DEFAULT_SUCCESS_RATE,
};
