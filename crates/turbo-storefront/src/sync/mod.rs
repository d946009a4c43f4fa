//! Page handlers, one module per page region.
//!
//! Each handler reads what it needs from the document, talks to the backend
//! through the [`PageContext`](crate::PageContext), and writes the result
//! back. None of them catch errors; the controller decides what the user
//! sees.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod profile;
pub mod promo;
pub mod variant;

/// What a handler did to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// The document changed.
    Updated,
    /// Nothing to do (a stepper at its bound, a declined confirmation).
    Unchanged,
}

/// Sequencing keys for controls that can overlap.
pub mod controls {
    pub const VARIANT: &str = "variant";
    pub const CATEGORY: &str = "category";
}
