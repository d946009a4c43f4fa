//! Page identifiers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifier for one page load.
///
/// Every handler on the page logs with the same id so a user session can be
/// followed across add-to-cart, variant and filter requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageId(String);

impl PageId {
    /// Generate a new page id.
    pub fn generate() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        Self(format!("page-{:06x}", n))
    }

    /// Create from an existing id string (e.g. rendered by the server).
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
