//! Page-level error types.

use thiserror::Error;
use turbo_commerce::CommerceError;
use turbo_data::FetchError;

/// Errors raised while syncing the page with the backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    /// Building, sending or decoding a request failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Input validation or a business rejection.
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    /// A newer request on the same control was issued before this one answered.
    #[error("Stale response for {control} (sequence {sequence})")]
    Stale { control: String, sequence: u64 },

    /// The page lacks an element the handler needs.
    #[error("Missing element: #{0}")]
    MissingElement(String),
}

impl SyncError {
    /// Whether the user caused this (bad input or a server-side refusal).
    pub fn is_user_facing(&self) -> bool {
        matches!(self, SyncError::Commerce(_))
    }
}
