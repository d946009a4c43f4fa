//! Checkout form and the cart page's navigation buttons.

use turbo_commerce::checkout::{
    digits_only, format_card_number, format_expiry, PaymentMethod, PaymentOutcome,
};
use turbo_data::Transport;

use super::Effect;
use crate::dom::{require_value, Document};
use crate::sections::{modal_icon_class, render_modal_icon, render_processing_button};
use crate::{PageContext, SyncError};

/// Payment inputs reformatted on every keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentField {
    CardNumber,
    Expiry,
    Cvv,
}

/// Reformat a payment input in place.
pub fn format_payment_field<D: Document, T: Transport>(
    ctx: &PageContext<D, T>,
    field: PaymentField,
) -> Result<Effect, SyncError> {
    let s = &ctx.config().selectors;
    let (id, format): (&str, fn(&str) -> String) = match field {
        PaymentField::CardNumber => (s.card_number.as_str(), format_card_number as fn(&str) -> String),
        PaymentField::Expiry => (s.expiry.as_str(), format_expiry),
        PaymentField::Cvv => (s.cvv.as_str(), digits_only),
    };

    let mut dom = ctx.dom_mut();
    let raw = require_value(&*dom, id)?;
    let formatted = format(&raw);
    if formatted == raw {
        return Ok(Effect::Unchanged);
    }
    dom.set_value(id, &formatted)?;
    Ok(Effect::Updated)
}

/// Mark `element_id` as the only active payment method.
pub fn select_payment_method<D: Document, T: Transport>(
    ctx: &PageContext<D, T>,
    element_id: &str,
) -> Result<Effect, SyncError> {
    let class = &ctx.config().selectors.payment_method_class;
    let mut dom = ctx.dom_mut();
    if !dom.has_class(element_id, class) {
        return Err(SyncError::MissingElement(element_id.to_string()));
    }
    for id in dom.ids_with_class(class) {
        dom.remove_class(&id, "active")?;
    }
    dom.add_class(element_id, "active")?;
    Ok(Effect::Updated)
}

/// The active payment method, card when none is marked.
pub fn selected_payment_method<D: Document + ?Sized>(dom: &D, method_class: &str) -> PaymentMethod {
    dom.ids_with_class(method_class)
        .into_iter()
        .find(|id| dom.has_class(id, "active"))
        .and_then(|id| dom.attribute(&id, "data-method"))
        .and_then(|name| PaymentMethod::parse(&name))
        .unwrap_or_default()
}

/// Submit the payment form and show the result modal.
pub fn submit_payment<D: Document, T: Transport>(
    ctx: &PageContext<D, T>,
) -> Result<PaymentOutcome, SyncError> {
    let s = &ctx.config().selectors;
    let m = &ctx.config().messages;

    let (method, original) = {
        let mut dom = ctx.dom_mut();
        let original = dom.inner_html(&s.place_order).unwrap_or_default();
        dom.set_disabled(&s.place_order, true)?;
        dom.set_inner_html(&s.place_order, &render_processing_button(&m.processing_payment))?;
        (
            selected_payment_method(&*dom, &s.payment_method_class),
            original,
        )
    };

    let outcome = ctx.payments().process(method);

    let mut dom = ctx.dom_mut();
    dom.set_disabled(&s.place_order, false)?;
    dom.set_inner_html(&s.place_order, &original)?;

    let success = outcome.is_approved();
    dom.set_class_name(&s.modal_icon, modal_icon_class(success))?;
    dom.set_inner_html(&s.modal_icon, render_modal_icon(success))?;
    match &outcome {
        PaymentOutcome::Approved { order } => {
            dom.set_text(&s.modal_title, &m.payment_success_title)?;
            dom.set_text(&s.modal_message, &m.payment_success_message)?;
            dom.set_text(&s.order_number, &order.label())?;
            dom.set_attribute(&s.order_number, "style", "display: block")?;
        }
        PaymentOutcome::Declined => {
            dom.set_text(&s.modal_title, &m.payment_failure_title)?;
            dom.set_text(&s.modal_message, &m.payment_failure_message)?;
            dom.set_attribute(&s.order_number, "style", "display: none")?;
        }
    }
    dom.add_class(&s.modal, "show")?;

    ctx.logger()
        .info_builder("payment processed")
        .field("method", method.as_str())
        .field_bool("approved", success)
        .emit();
    Ok(outcome)
}

/// Close the result modal when the click landed on its backdrop.
pub fn modal_click<D: Document, T: Transport>(
    ctx: &PageContext<D, T>,
    target_id: &str,
) -> Result<Effect, SyncError> {
    let modal = &ctx.config().selectors.modal;
    if target_id != modal {
        return Ok(Effect::Unchanged);
    }
    ctx.dom_mut().remove_class(modal, "show")?;
    Ok(Effect::Updated)
}

/// Cart page "proceed to checkout".
pub fn proceed_to_checkout<D: Document, T: Transport>(
    ctx: &PageContext<D, T>,
) -> Result<Effect, SyncError> {
    let config = ctx.config();
    let target = ctx.client().resolve(&config.checkout_path)?;
    let mut dom = ctx.dom_mut();
    dom.set_text(&config.selectors.checkout_button, &config.messages.checkout_processing)?;
    dom.navigate(target.as_str());
    Ok(Effect::Updated)
}

/// Back to the product listing.
pub fn continue_shopping<D: Document, T: Transport>(
    ctx: &PageContext<D, T>,
) -> Result<Effect, SyncError> {
    let target = ctx.client().resolve(&ctx.config().products_path)?;
    ctx.dom_mut().navigate(target.as_str());
    Ok(Effect::Updated)
}
