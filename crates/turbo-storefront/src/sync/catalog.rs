//! Category filter grid.

use turbo_commerce::catalog::{FilterPayload, FilterReply};
use turbo_commerce::{CategoryName, CommerceError, Endpoint};
use turbo_data::Transport;

use super::{controls, Effect};
use crate::dom::Document;
use crate::sections::render_product_card;
use crate::{PageContext, SyncError};

/// Rebuild the product grid for `category`.
///
/// On success the grid is replaced card by card in server order. On a
/// rejection or transport failure the grid is left as is and a notice goes
/// into the category status element.
pub async fn filter_category<D: Document, T: Transport>(
    ctx: &PageContext<D, T>,
    category: &str,
) -> Result<Effect, SyncError> {
    let category = CategoryName::new(category);
    let ticket = ctx.issue_ticket(controls::CATEGORY);
    let payload = FilterPayload {
        category: &category,
    };

    let result: Result<FilterReply, SyncError> = ctx
        .call(Endpoint::FilterCategory { category: &category }, &payload)
        .await;
    ctx.ensure_current(&ticket)?;

    let s = &ctx.config().selectors;
    let reply = match result {
        Ok(reply) if reply.status.is_success() => reply,
        Ok(reply) => {
            let message = reply
                .message
                .unwrap_or_else(|| ctx.config().messages.category_failed.clone());
            ctx.dom_mut().set_text(&s.category_status, &message)?;
            return Err(CommerceError::Rejected(message).into());
        }
        Err(err) => {
            ctx.dom_mut()
                .set_text(&s.category_status, &ctx.config().messages.category_failed)?;
            return Err(err);
        }
    };

    let mut dom = ctx.dom_mut();
    dom.set_text(&s.category_status, "")?;
    dom.set_inner_html(&s.product_container, "")?;
    for card in &reply.products {
        dom.append_html(
            &s.product_container,
            &render_product_card(card, &ctx.config().currency_symbol),
        )?;
    }
    ctx.logger()
        .info_builder("category filtered")
        .field("category", category.as_str())
        .field_u64("products", reply.products.len() as u64)
        .emit();
    Ok(Effect::Updated)
}
