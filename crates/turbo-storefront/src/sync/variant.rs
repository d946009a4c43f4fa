//! Variant switch on the product page.

use turbo_commerce::catalog::{stock_text, VariantPayload, VariantReply, VariantUpdate};
use turbo_commerce::quantity::QuantityBounds;
use turbo_commerce::{CommerceError, Endpoint, Sku};
use turbo_data::Transport;

use super::{controls, Effect};
use crate::config::StorefrontConfig;
use crate::dom::{AttributeRow, Document};
use crate::{PageContext, SyncError};

/// Switch the page to variant `sku`.
///
/// The hidden current-SKU field is written before the request and kept even
/// if the request fails. A reply overtaken by a later selection is dropped.
pub async fn select_variant<D: Document, T: Transport>(
    ctx: &PageContext<D, T>,
    sku: &str,
) -> Result<Effect, SyncError> {
    let sku = Sku::new(sku);
    ctx.dom_mut()
        .set_value(&ctx.config().selectors.current_sku, sku.as_str())?;
    let ticket = ctx.issue_ticket(controls::VARIANT);

    ctx.logger()
        .info_builder("switching variant")
        .field("sku", sku.as_str())
        .field_u64("sequence", ticket.sequence())
        .emit();

    let payload = VariantPayload { product_sku: &sku };
    let reply: VariantReply = ctx.call(Endpoint::UpdateVariant { sku: &sku }, &payload).await?;
    ctx.ensure_current(&ticket)?;

    if reply.is_rejected() {
        return Err(CommerceError::Rejected(format!("variant {} unavailable", sku)).into());
    }

    let update = reply.into_update(sku);
    apply_variant(&mut *ctx.dom_mut(), ctx.config(), &update)?;
    ctx.logger()
        .info_builder("variant applied")
        .field("sku", update.sku().as_str())
        .field_bool("full", update.is_full())
        .emit();
    Ok(Effect::Updated)
}

/// Render a decoded variant into the product panel.
///
/// Both kinds overwrite title, prices, stock and images. A full variant also
/// resets the quantity and lists its attributes; a base product clears the
/// list and pulls the quantity back within the new stock.
pub fn apply_variant<D: Document + ?Sized>(
    dom: &mut D,
    config: &StorefrontConfig,
    update: &VariantUpdate,
) -> Result<(), SyncError> {
    let s = &config.selectors;
    let symbol = &config.currency_symbol;
    let stock = update.stock().to_string();

    dom.set_text(&s.product_title, update.title())?;
    dom.set_text(&s.price, &update.price().display_with(symbol))?;
    dom.set_text(&s.old_price, &update.old_price().display_old_with(symbol))?;
    dom.set_text(&s.stock, &stock_text(update.stock()))?;
    dom.set_attribute(&s.stock, "data-stock", &stock)?;
    dom.set_attribute(&s.product_quantity, "max", &stock)?;
    dom.set_attribute(&s.active_image, "src", update.image_url())?;
    dom.set_attribute(&s.primary_thumbnail, "src", update.image_url())?;

    let rows: Vec<AttributeRow> = match update.attributes() {
        Some(attributes) => {
            dom.set_value(&s.product_quantity, &config.min_quantity.to_string())?;
            attributes
                .iter()
                .map(|(label, value)| AttributeRow::new(label, value))
                .collect()
        }
        None => {
            let bounds = QuantityBounds::new(config.min_quantity, update.stock());
            let current = dom
                .value(&s.product_quantity)
                .and_then(|v| v.trim().parse::<u32>().ok());
            if let Some(current) = current {
                let clamped = bounds.clamp(current);
                if clamped != current {
                    dom.set_value(&s.product_quantity, &clamped.to_string())?;
                }
            }
            Vec::new()
        }
    };
    dom.set_attribute_rows(&s.attribute_list, &s.attribute_row_class, &rows)
}

/// Make `thumbnail_id` the active thumbnail and show it as the main image.
pub fn select_thumbnail<D: Document, T: Transport>(
    ctx: &PageContext<D, T>,
    thumbnail_id: &str,
) -> Result<Effect, SyncError> {
    let s = &ctx.config().selectors;
    let mut dom = ctx.dom_mut();
    let src = dom
        .attribute(thumbnail_id, "src")
        .ok_or_else(|| SyncError::MissingElement(thumbnail_id.to_string()))?;

    for id in dom.ids_with_class(&s.thumbnail_class) {
        dom.remove_class(&id, "active")?;
    }
    dom.add_class(thumbnail_id, "active")?;
    dom.set_attribute(&s.active_image, "src", &src)?;
    Ok(Effect::Updated)
}
