//! Event wiring.
//!
//! The host page turns DOM events into [`Event`] values and hands them to
//! [`EventController::dispatch`]. Dispatch never fails: every error is logged
//! and summarized in the returned [`Outcome`].

use anyhow::Context;
use turbo_commerce::checkout::PaymentOutcome;
use turbo_data::Transport;

use crate::dom::Document;
use crate::sync::cart::{self, Step};
use crate::sync::checkout::{self, PaymentField};
use crate::sync::{catalog, profile, promo, variant, Effect};
use crate::{PageContext, SyncError};

/// A user interaction the storefront reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    // Product page
    AddToCart,
    StepQuantity { input_id: String, step: Step },
    SelectVariant { sku: String },
    SelectThumbnail { thumbnail_id: String },

    // Cart page
    RemoveLine { row_id: String },
    UpdateLineQuantity { row_id: String },
    ProceedToCheckout,
    ContinueShopping,

    // Product listing
    SelectCategory { category: String },

    // Promo box
    PromoInput,
    ApplyPromo,
    PromoKeyPress { key: String },

    // Checkout
    PaymentFieldInput { field: PaymentField },
    SelectPaymentMethod { element_id: String },
    SubmitPayment,
    ModalClick { target_id: String },

    // Profile
    ProfilePictureSelected { file_path: String, object_url: String },
}

impl Event {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Event::AddToCart => "add-to-cart",
            Event::StepQuantity { .. } => "step-quantity",
            Event::SelectVariant { .. } => "select-variant",
            Event::SelectThumbnail { .. } => "select-thumbnail",
            Event::RemoveLine { .. } => "remove-line",
            Event::UpdateLineQuantity { .. } => "update-line-quantity",
            Event::ProceedToCheckout => "proceed-to-checkout",
            Event::ContinueShopping => "continue-shopping",
            Event::SelectCategory { .. } => "select-category",
            Event::PromoInput => "promo-input",
            Event::ApplyPromo => "apply-promo",
            Event::PromoKeyPress { .. } => "promo-keypress",
            Event::PaymentFieldInput { .. } => "payment-field-input",
            Event::SelectPaymentMethod { .. } => "select-payment-method",
            Event::SubmitPayment => "submit-payment",
            Event::ModalClick { .. } => "modal-click",
            Event::ProfilePictureSelected { .. } => "profile-picture",
        }
    }
}

/// What dispatching an event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The page was updated.
    Applied,
    /// Nothing happened.
    Ignored,
    /// Bad input or a backend refusal; the message is what the user was told.
    Rejected(String),
    /// A newer request on the same control won.
    Discarded,
    /// Transport or page failure; the page was left as it was.
    Failed(String),
}

/// Routes events to the page handlers.
pub struct EventController<D, T> {
    ctx: PageContext<D, T>,
}

impl<D: Document, T: Transport> EventController<D, T> {
    pub fn new(ctx: PageContext<D, T>) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &PageContext<D, T> {
        &self.ctx
    }

    pub fn into_context(self) -> PageContext<D, T> {
        self.ctx
    }

    /// Handle one event.
    ///
    /// Takes `&self` so that a second event can be dispatched while the first
    /// one waits on the network.
    pub async fn dispatch(&self, event: Event) -> Outcome {
        let name = event.name();
        let result = self
            .handle(event)
            .await
            .with_context(|| format!("{} handler failed", name));

        match result {
            Ok(Effect::Updated) => Outcome::Applied,
            Ok(Effect::Unchanged) => Outcome::Ignored,
            Err(err) => self.classify(name, err),
        }
    }

    async fn handle(&self, event: Event) -> Result<Effect, SyncError> {
        let ctx = &self.ctx;
        match event {
            Event::AddToCart => cart::add_to_cart(ctx).await,
            Event::StepQuantity { input_id, step } => cart::step_quantity(ctx, &input_id, step),
            Event::SelectVariant { sku } => variant::select_variant(ctx, &sku).await,
            Event::SelectThumbnail { thumbnail_id } => variant::select_thumbnail(ctx, &thumbnail_id),
            Event::RemoveLine { row_id } => cart::remove_line(ctx, &row_id).await,
            Event::UpdateLineQuantity { row_id } => cart::update_line_quantity(ctx, &row_id).await,
            Event::ProceedToCheckout => checkout::proceed_to_checkout(ctx),
            Event::ContinueShopping => checkout::continue_shopping(ctx),
            Event::SelectCategory { category } => catalog::filter_category(ctx, &category).await,
            Event::PromoInput => promo::promo_input(ctx),
            Event::ApplyPromo => promo::apply_promo(ctx).await,
            Event::PromoKeyPress { key } if key == "Enter" => promo::apply_promo(ctx).await,
            Event::PromoKeyPress { .. } => Ok(Effect::Unchanged),
            Event::PaymentFieldInput { field } => checkout::format_payment_field(ctx, field),
            Event::SelectPaymentMethod { element_id } => {
                checkout::select_payment_method(ctx, &element_id)
            }
            Event::SubmitPayment => match checkout::submit_payment(ctx)? {
                PaymentOutcome::Approved { .. } | PaymentOutcome::Declined => Ok(Effect::Updated),
            },
            Event::ModalClick { target_id } => checkout::modal_click(ctx, &target_id),
            Event::ProfilePictureSelected {
                file_path,
                object_url,
            } => profile::preview_profile_picture(ctx, &file_path, &object_url),
        }
    }

    fn classify(&self, name: &str, err: anyhow::Error) -> Outcome {
        let logger = self.ctx.logger().for_component("controller");
        let Some(sync) = err.downcast_ref::<SyncError>() else {
            logger.error_builder(format!("{:#}", err)).field("event", name).emit();
            return Outcome::Failed(err.to_string());
        };

        match sync {
            SyncError::Stale { control, sequence } => {
                logger
                    .debug_builder("response superseded")
                    .field("event", name)
                    .field("control", control.clone())
                    .field_u64("sequence", *sequence)
                    .emit();
                Outcome::Discarded
            }
            SyncError::Commerce(rejection) => {
                logger
                    .warn_builder(format!("{:#}", err))
                    .field("event", name)
                    .emit();
                Outcome::Rejected(rejection.to_string())
            }
            SyncError::Fetch(_) | SyncError::MissingElement(_) => {
                logger
                    .error_builder(format!("{:#}", err))
                    .field("event", name)
                    .emit();
                Outcome::Failed(sync.to_string())
            }
        }
    }
}
