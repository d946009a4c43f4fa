//! Promo code box.

use turbo_commerce::promo::{uppercase_as_typed, PromoCode, PromoPayload, PromoReply, PromoState};
use turbo_commerce::{CommerceError, Endpoint};
use turbo_data::Transport;

use super::Effect;
use crate::dom::{require_value, Document};
use crate::{PageContext, SyncError};

/// Uppercase the input as the user types.
pub fn promo_input<D: Document, T: Transport>(ctx: &PageContext<D, T>) -> Result<Effect, SyncError> {
    let id = &ctx.config().selectors.promo_input;
    let mut dom = ctx.dom_mut();
    let raw = require_value(&*dom, id)?;
    let upper = uppercase_as_typed(&raw);
    if upper == raw {
        return Ok(Effect::Unchanged);
    }
    dom.set_value(id, &upper)?;
    Ok(Effect::Updated)
}

/// Verify the entered code with the backend.
///
/// An empty code shows a warning without any request. Ignored while a
/// verification is already running.
pub async fn apply_promo<D: Document, T: Transport>(
    ctx: &PageContext<D, T>,
) -> Result<Effect, SyncError> {
    let config = ctx.config();
    let s = &config.selectors;
    let m = &config.messages;

    if ctx.promo_state().is_applying() {
        return Ok(Effect::Unchanged);
    }

    let raw = require_value(&*ctx.dom(), &s.promo_input)?;
    let code = match PromoCode::parse(&raw) {
        Ok(code) => code,
        Err(err) => {
            ctx.promo_mut().reject_input(m.promo_empty.clone())?;
            show_message(&mut *ctx.dom_mut(), &s.promo_message, &m.promo_empty, "error")?;
            return Err(err.into());
        }
    };

    ctx.promo_mut().begin(code.clone())?;
    let _restore = RestoreOnExit { ctx };
    {
        let mut dom = ctx.dom_mut();
        dom.set_disabled(&s.promo_button, true)?;
        dom.set_text(&s.promo_button, &m.promo_applying)?;
    }
    ctx.logger()
        .info_builder("verifying promo code")
        .field("code", code.as_str())
        .emit();

    let payload = PromoPayload { promo_code: &code };
    let result: Result<PromoReply, SyncError> =
        ctx.call(Endpoint::VerifyPromo { code: code.as_str() }, &payload).await;

    let (outcome, error): (Result<String, String>, Option<SyncError>) = match result {
        Ok(reply) => match reply.into_result() {
            Ok(message) => (Ok(message), None),
            Err(CommerceError::Rejected(message)) => {
                (Err(message.clone()), Some(CommerceError::Rejected(message).into()))
            }
            Err(other) => (Err(m.promo_rejected.clone()), Some(other.into())),
        },
        Err(SyncError::Fetch(err)) => {
            let message = err.server_message().unwrap_or_else(|| m.promo_rejected.clone());
            (Err(message), Some(SyncError::Fetch(err)))
        }
        Err(other) => (Err(m.promo_rejected.clone()), Some(other)),
    };

    ctx.promo_mut().finish(outcome.clone())?;
    {
        let mut dom = ctx.dom_mut();
        match &outcome {
            Ok(message) => {
                let text = format!("{}{}", m.promo_success_prefix, message);
                show_message(&mut *dom, &s.promo_message, &text, "success")?;
                dom.set_value(&s.promo_input, "")?;
            }
            Err(message) => {
                let text = format!("{}{}", m.promo_error_prefix, message);
                show_message(&mut *dom, &s.promo_message, &text, "error")?;
            }
        }
    }

    match error {
        None => Ok(Effect::Updated),
        Some(err) => Err(err),
    }
}

/// Re-enables the apply button when `apply_promo` returns or is dropped,
/// and releases a verification that never finished.
struct RestoreOnExit<'a, D: Document, T: Transport> {
    ctx: &'a PageContext<D, T>,
}

impl<D: Document, T: Transport> Drop for RestoreOnExit<'_, D, T> {
    fn drop(&mut self) {
        if let Ok(mut state) = self.ctx.try_promo_mut() {
            if state.is_applying() {
                *state = PromoState::Idle;
            }
        }
        let config = self.ctx.config();
        if let Ok(mut dom) = self.ctx.try_dom_mut() {
            // Missing elements are already reported by the handler.
            let _ = dom.set_disabled(&config.selectors.promo_button, false);
            let _ = dom.set_text(&config.selectors.promo_button, &config.messages.promo_apply);
        }
    }
}

fn show_message<D: Document + ?Sized>(
    dom: &mut D,
    id: &str,
    text: &str,
    kind: &str,
) -> Result<(), SyncError> {
    dom.set_text(id, text)?;
    dom.set_class_name(id, &format!("message {} show", kind))
}
