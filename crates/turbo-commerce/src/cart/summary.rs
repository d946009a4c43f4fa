//! Server-computed cart summary and cart endpoint replies.

use crate::price::Price;
use crate::wire::ResponseStatus;
use serde::{Deserialize, Serialize};

/// Snapshot of the cart totals.
///
/// Always recomputed by the server; the client only displays the latest one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CartSummary {
    /// Number of distinct lines.
    #[serde(rename = "count")]
    pub item_count: u32,
    /// Sum of quantities across lines.
    #[serde(rename = "total_items")]
    pub total_units: u32,
    #[serde(rename = "subtotal_price")]
    pub subtotal: Price,
    pub taxes: Price,
    pub shipping_fee: Price,
    #[serde(rename = "total_price")]
    pub total: Price,
}

/// Display strings for every summary region of the cart page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryText {
    /// Header badge: bare count.
    pub badge: String,
    /// "Shopping Cart : N items".
    pub header: String,
    /// "Subtotal (N) units".
    pub subtotal_units: String,
    pub subtotal: String,
    pub taxes: String,
    pub shipping: String,
    pub total: String,
}

impl CartSummary {
    /// Render display strings: counts bare, money prefixed with `symbol`.
    pub fn render(&self, symbol: &str) -> SummaryText {
        SummaryText {
            badge: self.item_count.to_string(),
            header: format!("Shopping Cart : {} items", self.item_count),
            subtotal_units: format!("Subtotal ({}) units", self.total_units),
            subtotal: self.subtotal.display_with(symbol),
            taxes: self.taxes.display_with(symbol),
            shipping: self.shipping_fee.display_with(symbol),
            total: self.total.display_with(symbol),
        }
    }
}

/// Reply of `/cart/add/{sku}/{quantity}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct AddToCartReply {
    #[serde(default)]
    pub status: ResponseStatus,
    /// Distinct lines in the cart after the add.
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Reply of the delete and update-quantity endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct CartMutationReply {
    #[serde(default)]
    pub status: ResponseStatus,
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub cart_summary: Option<CartSummary>,
}

impl CartMutationReply {
    /// The summary, if the server reported success and sent one.
    pub fn accepted_summary(&self) -> Option<&CartSummary> {
        if self.status.is_success() {
            self.cart_summary.as_ref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CartSummary {
        serde_json::from_value(serde_json::json!({
            "count": 2,
            "total_items": 5,
            "subtotal_price": "250.00",
            "taxes": "50.00",
            "shipping_fee": 120,
            "total_price": "420.00"
        }))
        .unwrap()
    }

    #[test]
    fn test_summary_wire_names() {
        let summary = sample();
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.total_units, 5);
        assert_eq!(summary.shipping_fee.to_string(), "$120");
    }

    #[test]
    fn test_render_prefixes_money_only() {
        let text = sample().render("$");
        assert_eq!(text.badge, "2");
        assert_eq!(text.header, "Shopping Cart : 2 items");
        assert_eq!(text.subtotal_units, "Subtotal (5) units");
        assert_eq!(text.subtotal, "$250.00");
        assert_eq!(text.taxes, "$50.00");
        assert_eq!(text.shipping, "$120");
        assert_eq!(text.total, "$420.00");
    }

    #[test]
    fn test_mutation_reply_rejected_has_no_summary() {
        let reply: CartMutationReply = serde_json::from_value(serde_json::json!({
            "status": "error",
            "message": "product 'X' doesn't exist"
        }))
        .unwrap();
        assert!(reply.accepted_summary().is_none());
        assert_eq!(reply.message.as_deref(), Some("product 'X' doesn't exist"));
    }

    #[test]
    fn test_mutation_reply_success() {
        let reply: CartMutationReply = serde_json::from_value(serde_json::json!({
            "status": "success",
            "count": 1,
            "message": "removed successfully",
            "cart_summary": serde_json::to_value(sample()).unwrap()
        }))
        .unwrap();
        assert_eq!(reply.accepted_summary(), Some(&sample()));
    }

    #[test]
    fn test_add_reply() {
        let reply: AddToCartReply =
            serde_json::from_value(serde_json::json!({ "status": "success", "count": 3, "cart": {} }))
                .unwrap();
        assert!(reply.status.is_success());
        assert_eq!(reply.count, Some(3));
    }
}
