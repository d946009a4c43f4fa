//! Cart line items and the payloads that mutate them.

use crate::ids::Sku;
use crate::wire::Attributes;
use serde::{Deserialize, Serialize};

/// An item as sent to `/cart/add/{sku}/{quantity}`.
///
/// The wire names follow the backend: `image` and `attributes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    /// SKU of the selected variant.
    pub sku: Sku,
    /// Image shown next to the line in the cart.
    #[serde(rename = "image")]
    pub image_url: String,
    /// Requested quantity.
    pub quantity: u32,
    /// Attributes of the selected variant, in display order.
    #[serde(rename = "attributes")]
    pub selected_attributes: Attributes,
}

impl CartLineItem {
    pub fn new(sku: Sku, quantity: u32, image_url: impl Into<String>) -> Self {
        Self {
            sku,
            image_url: image_url.into(),
            quantity,
            selected_attributes: Attributes::new(),
        }
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.selected_attributes = attributes;
        self
    }
}

/// Body of `/cart/delete/{sku}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletePayload {
    pub sku: Sku,
}

/// Body of `/cart/update-quantity/{sku}&{quantity}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateQuantityPayload {
    pub title: String,
    pub quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_payload_wire_names() {
        let attributes: Attributes = [("Color", "Red"), ("Size", "M")].into_iter().collect();
        let item = CartLineItem::new(Sku::new("TEE-M"), 2, "/media/tee.png").with_attributes(attributes);

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "sku": "TEE-M",
                "image": "/media/tee.png",
                "quantity": 2,
                "attributes": { "Color": "Red", "Size": "M" }
            })
        );
    }

    #[test]
    fn test_update_payload() {
        let payload = UpdateQuantityPayload {
            title: "Tee".to_string(),
            quantity: 4,
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({ "title": "Tee", "quantity": 4 })
        );
    }
}
