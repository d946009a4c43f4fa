//! Payment methods and the payment decision.

use crate::checkout::OrderNumber;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Share of simulated payments that succeed.
pub const DEFAULT_SUCCESS_RATE: f64 = 0.9;

/// Payment method tiles on the checkout page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Card,
    Paypal,
    BankTransfer,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Card,
        PaymentMethod::Paypal,
        PaymentMethod::BankTransfer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Paypal => "paypal",
            PaymentMethod::BankTransfer => "bank_transfer",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == s)
    }
}

/// Result of submitting the payment form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
    Approved { order: OrderNumber },
    Declined,
}

impl PaymentOutcome {
    pub fn is_approved(&self) -> bool {
        matches!(self, PaymentOutcome::Approved { .. })
    }
}

/// Decides whether a submitted payment goes through.
pub trait PaymentProcessor {
    fn process(&self, method: PaymentMethod) -> PaymentOutcome;
}

/// Stand-in processor approving a fixed share of payments at random.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedProcessor {
    success_rate: f64,
}

impl SimulatedProcessor {
    /// `success_rate` is clamped into `[0, 1]`; NaN falls back to
    /// [`DEFAULT_SUCCESS_RATE`].
    pub fn new(success_rate: f64) -> Self {
        let success_rate = if success_rate.is_nan() {
            DEFAULT_SUCCESS_RATE
        } else {
            success_rate.clamp(0.0, 1.0)
        };
        Self { success_rate }
    }

    pub fn success_rate(&self) -> f64 {
        self.success_rate
    }
}

impl Default for SimulatedProcessor {
    fn default() -> Self {
        Self::new(DEFAULT_SUCCESS_RATE)
    }
}

impl PaymentProcessor for SimulatedProcessor {
    fn process(&self, _method: PaymentMethod) -> PaymentOutcome {
        if rand::rng().random_bool(self.success_rate) {
            PaymentOutcome::Approved {
                order: OrderNumber::generate(),
            }
        } else {
            PaymentOutcome::Declined
        }
    }
}
