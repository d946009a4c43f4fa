//! Cart panel: add to cart, line removal and quantity edits, summary.

use turbo_commerce::cart::{
    AddToCartReply, CartLineItem, CartMutationReply, CartSummary, DeletePayload,
    UpdateQuantityPayload,
};
use turbo_commerce::quantity::{parse_quantity, QuantityBounds};
use turbo_commerce::{Attributes, CommerceError, Endpoint, Sku};
use turbo_data::Transport;

use super::Effect;
use crate::config::{Selectors, StorefrontConfig};
use crate::dom::{require_attribute, require_value, Document};
use crate::{PageContext, SyncError};

/// Stepper direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Up,
    Down,
}

/// Parse the product page quantity input.
pub fn read_quantity<D: Document + ?Sized>(dom: &D, selectors: &Selectors) -> Result<u32, SyncError> {
    let raw = require_value(dom, &selectors.product_quantity)?;
    Ok(parse_quantity(&raw)?)
}

/// Attribute rows with `row_class` as an ordered mapping.
///
/// A repeated label overwrites the earlier value but keeps its position.
pub fn read_selected_attributes<D: Document + ?Sized>(dom: &D, row_class: &str) -> Attributes {
    dom.attribute_rows(row_class)
        .into_iter()
        .map(|row| (row.label, row.value))
        .collect()
}

/// Write a server summary into every summary region.
pub fn apply_cart_summary<D: Document + ?Sized>(
    dom: &mut D,
    config: &StorefrontConfig,
    summary: &CartSummary,
) -> Result<(), SyncError> {
    let text = summary.render(&config.currency_symbol);
    let s = &config.selectors;
    dom.set_text(&s.cart_badge, &text.badge)?;
    dom.set_text(&s.items_count, &text.header)?;
    dom.set_text(&s.subtotal_items, &text.subtotal_units)?;
    dom.set_text(&s.subtotal_price, &text.subtotal)?;
    dom.set_text(&s.taxes, &text.taxes)?;
    dom.set_text(&s.shipping, &text.shipping)?;
    dom.set_text(&s.total, &text.total)?;
    Ok(())
}

/// Add the selected product to the cart.
///
/// A zero or unreadable quantity alerts and sends nothing.
pub async fn add_to_cart<D: Document, T: Transport>(
    ctx: &PageContext<D, T>,
) -> Result<Effect, SyncError> {
    let s = &ctx.config().selectors;
    let item = {
        let mut dom = ctx.dom_mut();
        let quantity = match read_quantity(&*dom, s) {
            Ok(quantity) => quantity,
            Err(SyncError::Commerce(err)) => {
                dom.alert(&err.to_string());
                return Err(err.into());
            }
            Err(err) => return Err(err),
        };
        let sku = Sku::new(require_value(&*dom, &s.current_sku)?);
        let image = dom.attribute(&s.active_image, "src").unwrap_or_default();
        CartLineItem::new(sku, quantity, image)
            .with_attributes(read_selected_attributes(&*dom, &s.attribute_row_class))
    };

    ctx.logger()
        .info_builder("adding to cart")
        .field("sku", item.sku.as_str())
        .field_u64("quantity", u64::from(item.quantity))
        .emit();

    let endpoint = Endpoint::AddToCart {
        sku: &item.sku,
        quantity: item.quantity,
    };
    let reply: AddToCartReply = ctx.call(endpoint, &item).await?;
    if !reply.status.is_success() {
        return Err(rejected(reply.message));
    }

    if let Some(count) = reply.count {
        ctx.dom_mut().set_text(&s.cart_badge, &count.to_string())?;
    }
    Ok(Effect::Updated)
}

/// Remove a cart row after confirmation.
pub async fn remove_line<D: Document, T: Transport>(
    ctx: &PageContext<D, T>,
    row_id: &str,
) -> Result<Effect, SyncError> {
    let sku = {
        let mut dom = ctx.dom_mut();
        if !dom.confirm(&ctx.config().messages.confirm_remove) {
            return Ok(Effect::Unchanged);
        }
        Sku::new(require_attribute(&*dom, row_id, "data-sku")?)
    };

    let payload = DeletePayload { sku: sku.clone() };
    let reply: CartMutationReply = ctx.call(Endpoint::DeleteFromCart { sku: &sku }, &payload).await?;
    if !reply.status.is_success() {
        return Err(rejected(reply.message));
    }

    let mut dom = ctx.dom_mut();
    dom.remove_element(row_id);
    if let Some(summary) = reply.accepted_summary() {
        apply_cart_summary(&mut *dom, ctx.config(), summary)?;
    }
    ctx.logger()
        .info_builder("removed cart line")
        .field("sku", sku.as_str())
        .emit();
    Ok(Effect::Updated)
}

/// Send a cart row's edited quantity.
pub async fn update_line_quantity<D: Document, T: Transport>(
    ctx: &PageContext<D, T>,
    row_id: &str,
) -> Result<Effect, SyncError> {
    let s = &ctx.config().selectors;
    let (sku, payload) = {
        let mut dom = ctx.dom_mut();
        let sku = Sku::new(require_attribute(&*dom, row_id, "data-sku")?);
        let raw = require_value(&*dom, &s.row_quantity(sku.as_str()))?;
        let quantity = match parse_quantity(&raw) {
            Ok(quantity) => quantity,
            Err(err) => {
                dom.alert(&err.to_string());
                return Err(err.into());
            }
        };
        let title = dom.text(&s.row_title(sku.as_str())).unwrap_or_default();
        (sku, UpdateQuantityPayload { title, quantity })
    };

    let endpoint = Endpoint::UpdateQuantity {
        sku: &sku,
        quantity: payload.quantity,
    };
    let reply: CartMutationReply = ctx.call(endpoint, &payload).await?;
    if !reply.status.is_success() {
        return Err(rejected(reply.message));
    }

    if let Some(summary) = reply.accepted_summary() {
        apply_cart_summary(&mut *ctx.dom_mut(), ctx.config(), summary)?;
    }
    Ok(Effect::Updated)
}

/// Move a quantity input one step within `[min_quantity, stock]`.
///
/// The product page ceiling is the stock element's `data-stock`; elsewhere
/// (and as a fallback) the input's own `max` attribute. Without either the
/// input does not grow.
pub fn step_quantity<D: Document, T: Transport>(
    ctx: &PageContext<D, T>,
    input_id: &str,
    step: Step,
) -> Result<Effect, SyncError> {
    let config = ctx.config();
    let mut dom = ctx.dom_mut();
    let raw = require_value(&*dom, input_id)?;
    let current: u32 = raw
        .trim()
        .parse()
        .map_err(|_| CommerceError::InvalidQuantity(raw.trim().to_string()))?;

    let stock_ceiling = if input_id == config.selectors.product_quantity {
        dom.attribute(&config.selectors.stock, "data-stock")
    } else {
        None
    };
    let max = stock_ceiling
        .or_else(|| dom.attribute(input_id, "max"))
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(0);
    let bounds = QuantityBounds::new(config.min_quantity, max);

    let next = match step {
        Step::Up => bounds.step_up(current),
        Step::Down => bounds.step_down(current),
    };
    match next {
        Some(quantity) => {
            dom.set_value(input_id, &quantity.to_string())?;
            Ok(Effect::Updated)
        }
        None => Ok(Effect::Unchanged),
    }
}

fn rejected(message: Option<String>) -> SyncError {
    CommerceError::Rejected(message.unwrap_or_else(|| "request rejected".to_string())).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use crate::MemoryDocument;

    fn summary_body(count: u32, units: u32) -> serde_json::Value {
        serde_json::json!({
            "count": count,
            "total_items": units,
            "subtotal_price": "60.00",
            "taxes": "12.00",
            "shipping_fee": "5.00",
            "total_price": "77.00"
        })
    }

    // === Summary ===

    #[test]
    fn test_apply_cart_summary_prefixes_money_only() {
        let mut dom = cart_page();
        let summary: CartSummary = serde_json::from_value(summary_body(2, 3)).unwrap();
        apply_cart_summary(&mut dom, &StorefrontConfig::default(), &summary).unwrap();

        let text = |id: &str| dom.text(id).unwrap();
        assert_eq!(text("cart-items"), "2");
        assert_eq!(text("items-count"), "Shopping Cart : 2 items");
        assert_eq!(text("subtotal-items"), "Subtotal (3) units");
        assert_eq!(text("subtotal-price"), "$60.00");
        assert_eq!(text("vat"), "$12.00");
        assert_eq!(text("shipping"), "$5.00");
        assert_eq!(text("final-total"), "$77.00");
    }

    #[test]
    fn test_selected_attributes_last_wins() {
        let dom = MemoryDocument::new().with_element(
            "list",
            crate::memory::Element::new().with_rows(
                "attr",
                vec![
                    crate::AttributeRow::new("Color", "Red"),
                    crate::AttributeRow::new("Size", "M"),
                    crate::AttributeRow::new("Color", "Blue"),
                ],
            ),
        );
        let attributes = read_selected_attributes(&dom, "attr");
        let entries: Vec<_> = attributes.iter().collect();
        assert_eq!(entries, vec![("Color", "Blue"), ("Size", "M")]);
    }

    // === Add to cart ===

    #[tokio::test]
    async fn test_add_to_cart_sends_line_and_updates_badge() {
        let transport = scripted(
            ScriptedTransport::new().with_json(serde_json::json!({ "status": "success", "count": 3 })),
        );
        let ctx = context(product_page(), transport.clone());
        ctx.dom_mut().set_value("product-quantity", "2").unwrap();

        assert_eq!(add_to_cart(&ctx).await, Ok(Effect::Updated));

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.url, "https://shop.test/cart/add/TEE/2");
        assert_eq!(request.header("X-CSRFToken"), Some("tok123"));
        assert_eq!(
            request.json_body(),
            Some(serde_json::json!({
                "sku": "TEE",
                "image": "/media/tee.png",
                "quantity": 2,
                "attributes": { "Color": "Red", "Size": "M" }
            }))
        );
        assert_eq!(ctx.dom().text("cart-items").as_deref(), Some("3"));
    }

    #[tokio::test]
    async fn test_zero_quantity_alerts_without_request() {
        let transport = scripted(ScriptedTransport::new());
        let ctx = context(product_page(), transport.clone());
        ctx.dom_mut().set_value("product-quantity", "0").unwrap();

        let err = add_to_cart(&ctx).await.unwrap_err();
        assert_eq!(err, SyncError::Commerce(CommerceError::ZeroQuantity));
        assert!(transport.requests().is_empty());

        let dom = ctx.dom();
        assert_eq!(dom.alerts(), &["Product quantity could not be 0".to_string()]);
        assert_eq!(dom.text("cart-items").as_deref(), Some("0"));
    }

    #[tokio::test]
    async fn test_add_to_cart_rejected_keeps_badge() {
        let transport = scripted(ScriptedTransport::new().with_json(
            serde_json::json!({ "status": "error", "message": "out of stock" }),
        ));
        let ctx = context(product_page(), transport);

        let err = add_to_cart(&ctx).await.unwrap_err();
        assert_eq!(err, SyncError::Commerce(CommerceError::Rejected("out of stock".to_string())));
        assert_eq!(ctx.dom().text("cart-items").as_deref(), Some("0"));
    }

    // === Cart rows ===

    #[tokio::test]
    async fn test_remove_line_detaches_row_and_applies_summary() {
        let transport = scripted(ScriptedTransport::new().with_json(serde_json::json!({
            "status": "success",
            "count": 0,
            "message": "removed",
            "cart_summary": summary_body(0, 0)
        })));
        let ctx = context(cart_page(), transport.clone());

        assert_eq!(remove_line(&ctx, "row-TEE-M").await, Ok(Effect::Updated));

        let request = &transport.requests()[0];
        assert_eq!(request.url, "https://shop.test/cart/delete/TEE-M");
        assert_eq!(request.json_body(), Some(serde_json::json!({ "sku": "TEE-M" })));

        let dom = ctx.dom();
        assert!(!dom.contains("row-TEE-M"));
        assert_eq!(dom.text("items-count").as_deref(), Some("Shopping Cart : 0 items"));
        assert_eq!(dom.confirmations(), &["Are you sure you want to remove this item?".to_string()]);
    }

    #[tokio::test]
    async fn test_remove_line_declined() {
        let transport = scripted(ScriptedTransport::new());
        let mut dom = cart_page();
        dom.answer_confirm(false);
        let ctx = context(dom, transport.clone());

        assert_eq!(remove_line(&ctx, "row-TEE-M").await, Ok(Effect::Unchanged));
        assert!(transport.requests().is_empty());
        assert!(ctx.dom().contains("row-TEE-M"));
    }

    #[tokio::test]
    async fn test_remove_line_transport_failure_keeps_row() {
        let transport = scripted(ScriptedTransport::new().with_failure("offline"));
        let ctx = context(cart_page(), transport);

        let err = remove_line(&ctx, "row-TEE-M").await.unwrap_err();
        assert!(matches!(err, SyncError::Fetch(_)));
        assert!(ctx.dom().contains("row-TEE-M"));
        assert_eq!(ctx.dom().text("cart-items").as_deref(), Some("1"));
    }

    #[tokio::test]
    async fn test_update_line_quantity() {
        let transport = scripted(ScriptedTransport::new().with_json(serde_json::json!({
            "status": "success",
            "message": "updated",
            "cart_summary": summary_body(1, 3)
        })));
        let ctx = context(cart_page(), transport.clone());
        ctx.dom_mut().set_value("quantity-TEE-M", "3").unwrap();

        assert_eq!(update_line_quantity(&ctx, "row-TEE-M").await, Ok(Effect::Updated));

        let request = &transport.requests()[0];
        assert_eq!(request.url, "https://shop.test/cart/update-quantity/TEE-M&3");
        assert_eq!(
            request.json_body(),
            Some(serde_json::json!({ "title": "Tee (M)", "quantity": 3 }))
        );
        assert_eq!(ctx.dom().text("subtotal-items").as_deref(), Some("Subtotal (3) units"));
    }

    #[tokio::test]
    async fn test_update_line_quantity_http_error() {
        let transport = scripted(ScriptedTransport::new().with_status(
            400,
            serde_json::json!({ "status": "error", "message": "product 'TEE-M' doesn't exist" }),
        ));
        let ctx = context(cart_page(), transport);

        let err = update_line_quantity(&ctx, "row-TEE-M").await.unwrap_err();
        assert!(matches!(err, SyncError::Fetch(turbo_data::FetchError::Http { status: 400, .. })));
        assert_eq!(ctx.dom().text("final-total").as_deref(), Some("$53.00"));
    }

    // === Stepper ===

    #[test]
    fn test_stepper_bounded_by_data_stock() {
        let ctx = context(product_page(), scripted(ScriptedTransport::new()));
        ctx.dom_mut().set_value("product-quantity", "4").unwrap();

        assert_eq!(step_quantity(&ctx, "product-quantity", Step::Up), Ok(Effect::Updated));
        assert_eq!(ctx.dom().value("product-quantity").as_deref(), Some("5"));
        assert_eq!(step_quantity(&ctx, "product-quantity", Step::Up), Ok(Effect::Unchanged));
        assert_eq!(ctx.dom().value("product-quantity").as_deref(), Some("5"));
    }

    #[test]
    fn test_stepper_floor() {
        let ctx = context(product_page(), scripted(ScriptedTransport::new()));

        assert_eq!(step_quantity(&ctx, "product-quantity", Step::Down), Ok(Effect::Unchanged));
        assert_eq!(ctx.dom().value("product-quantity").as_deref(), Some("1"));
    }

    #[test]
    fn test_cart_row_stepper_uses_max_attribute() {
        let ctx = context(cart_page(), scripted(ScriptedTransport::new()));

        assert_eq!(step_quantity(&ctx, "quantity-TEE-M", Step::Up), Ok(Effect::Updated));
        assert_eq!(step_quantity(&ctx, "quantity-TEE-M", Step::Up), Ok(Effect::Updated));
        assert_eq!(step_quantity(&ctx, "quantity-TEE-M", Step::Up), Ok(Effect::Unchanged));
        assert_eq!(ctx.dom().value("quantity-TEE-M").as_deref(), Some("4"));

        assert_eq!(step_quantity(&ctx, "quantity-TEE-M", Step::Down), Ok(Effect::Updated));
        assert_eq!(ctx.dom().value("quantity-TEE-M").as_deref(), Some("3"));
    }

    #[test]
    fn test_stepper_without_ceiling_does_not_grow() {
        let dom = MemoryDocument::new()
            .with_element("q", crate::memory::Element::new().with_value("1"));
        let ctx = context(dom, scripted(ScriptedTransport::new()));
        assert_eq!(step_quantity(&ctx, "q", Step::Up), Ok(Effect::Unchanged));
    }
}
