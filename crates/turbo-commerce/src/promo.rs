//! Promo code normalization and the apply-button state machine.

use crate::error::CommerceError;
use crate::wire::ResponseStatus;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A normalized promo code: trimmed and uppercase, never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PromoCode(String);

impl PromoCode {
    /// Normalize raw input. `" save10 "` and `"SAVE10"` yield the same code.
    pub fn parse(input: &str) -> Result<Self, CommerceError> {
        let code = input.trim().to_uppercase();
        if code.is_empty() {
            return Err(CommerceError::EmptyPromoCode);
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PromoCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the input box shows while the user types.
pub fn uppercase_as_typed(input: &str) -> String {
    input.to_uppercase()
}

/// Body of the `promo-code/verify/{code}` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromoPayload<'a> {
    pub promo_code: &'a PromoCode,
}

/// Reply of `promo-code/verify/{code}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct PromoReply {
    #[serde(default)]
    pub status: ResponseStatus,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl PromoReply {
    /// Success message, or the rejection text as an error.
    pub fn into_result(self) -> Result<String, CommerceError> {
        if self.status.is_success() {
            Ok(self.message.unwrap_or_default())
        } else {
            Err(CommerceError::Rejected(
                self.error
                    .or(self.message)
                    .unwrap_or_else(|| "Invalid promo code".to_string()),
            ))
        }
    }
}

/// Apply-button lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PromoState {
    #[default]
    Idle,
    Applying {
        code: PromoCode,
    },
    Success {
        message: String,
    },
    Error {
        message: String,
    },
}

impl PromoState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromoState::Idle => "idle",
            PromoState::Applying { .. } => "applying",
            PromoState::Success { .. } => "success",
            PromoState::Error { .. } => "error",
        }
    }

    pub fn is_applying(&self) -> bool {
        matches!(self, PromoState::Applying { .. })
    }

    /// Start verifying `code`. Refused while a verification is in flight.
    pub fn begin(&mut self, code: PromoCode) -> Result<(), CommerceError> {
        if self.is_applying() {
            return Err(self.invalid("applying"));
        }
        *self = PromoState::Applying { code };
        Ok(())
    }

    /// Record a validation failure that never reached the network.
    pub fn reject_input(&mut self, message: impl Into<String>) -> Result<(), CommerceError> {
        if self.is_applying() {
            return Err(self.invalid("error"));
        }
        *self = PromoState::Error {
            message: message.into(),
        };
        Ok(())
    }

    /// Finish the in-flight verification.
    pub fn finish(&mut self, outcome: Result<String, String>) -> Result<(), CommerceError> {
        if !self.is_applying() {
            let to = if outcome.is_ok() { "success" } else { "error" };
            return Err(self.invalid(to));
        }
        *self = match outcome {
            Ok(message) => PromoState::Success { message },
            Err(message) => PromoState::Error { message },
        };
        Ok(())
    }

    fn invalid(&self, to: &str) -> CommerceError {
        CommerceError::InvalidTransition {
            from: self.as_str().to_string(),
            to: to.to_string(),
        }
    }
}
