//! Page context: everything a handler needs, passed explicitly.

use std::cell::{BorrowMutError, Ref, RefCell, RefMut};

use edge_observability::StructuredLogger;
use serde::de::DeserializeOwned;
use serde::Serialize;
use turbo_commerce::checkout::{PaymentProcessor, SimulatedProcessor};
use turbo_commerce::promo::PromoState;
use turbo_commerce::Endpoint;
use turbo_data::{read_cookie, FetchClient, RequestSequencer, Ticket, Transport};

use crate::config::StorefrontConfig;
use crate::dom::Document;
use crate::SyncError;

/// One loaded page.
///
/// The document sits in a `RefCell`; handlers borrow it in short scopes and
/// never hold a borrow across an `.await`.
pub struct PageContext<D, T> {
    config: StorefrontConfig,
    dom: RefCell<D>,
    client: FetchClient,
    transport: T,
    sequencer: RefCell<RequestSequencer>,
    promo: RefCell<PromoState>,
    payments: Box<dyn PaymentProcessor>,
    logger: StructuredLogger,
}

impl<D: Document, T: Transport> PageContext<D, T> {
    /// Bind a page. The CSRF token is read from the document's cookies once.
    pub fn new(
        config: StorefrontConfig,
        dom: D,
        transport: T,
        logger: StructuredLogger,
    ) -> Result<Self, SyncError> {
        let mut client = FetchClient::new(&dom.location())?;
        match read_cookie(&dom.cookie(), &config.csrf.cookie) {
            Some(token) => client = client.with_csrf(config.csrf.header.clone(), token),
            None => logger
                .warn_builder("no CSRF cookie on page")
                .field("cookie", config.csrf.cookie.clone())
                .emit(),
        }
        let payments = Box::new(SimulatedProcessor::new(config.payment_success_rate));

        Ok(Self {
            config,
            dom: RefCell::new(dom),
            client,
            transport,
            sequencer: RefCell::new(RequestSequencer::new()),
            promo: RefCell::new(PromoState::default()),
            payments,
            logger,
        })
    }

    /// Replace the payment processor.
    pub fn with_payment_processor(mut self, processor: impl PaymentProcessor + 'static) -> Self {
        self.payments = Box::new(processor);
        self
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn dom(&self) -> Ref<'_, D> {
        self.dom.borrow()
    }

    pub fn dom_mut(&self) -> RefMut<'_, D> {
        self.dom.borrow_mut()
    }

    /// Give the document back, e.g. for inspection after a test.
    pub fn into_document(self) -> D {
        self.dom.into_inner()
    }

    pub fn client(&self) -> &FetchClient {
        &self.client
    }

    pub fn logger(&self) -> &StructuredLogger {
        &self.logger
    }

    pub fn payments(&self) -> &dyn PaymentProcessor {
        self.payments.as_ref()
    }

    pub fn promo_state(&self) -> PromoState {
        self.promo.borrow().clone()
    }

    pub(crate) fn promo_mut(&self) -> RefMut<'_, PromoState> {
        self.promo.borrow_mut()
    }

    pub(crate) fn try_promo_mut(&self) -> Result<RefMut<'_, PromoState>, BorrowMutError> {
        self.promo.try_borrow_mut()
    }

    pub(crate) fn try_dom_mut(&self) -> Result<RefMut<'_, D>, BorrowMutError> {
        self.dom.try_borrow_mut()
    }

    /// Take a ticket for `control`, superseding its earlier requests.
    pub fn issue_ticket(&self, control: &str) -> Ticket {
        self.sequencer.borrow_mut().issue(control)
    }

    /// Fail with [`SyncError::Stale`] if a newer ticket exists for the control.
    pub fn ensure_current(&self, ticket: &Ticket) -> Result<(), SyncError> {
        if self.sequencer.borrow().is_current(ticket) {
            return Ok(());
        }
        self.logger
            .warn_builder("discarding stale response")
            .field("control", ticket.control())
            .field_u64("sequence", ticket.sequence())
            .emit();
        Err(SyncError::Stale {
            control: ticket.control().to_string(),
            sequence: ticket.sequence(),
        })
    }

    /// POST `payload` to `endpoint` and decode the JSON reply.
    pub async fn call<P, R>(&self, endpoint: Endpoint<'_>, payload: &P) -> Result<R, SyncError>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let path = endpoint.path();
        let request = self.client.mutation(&path, payload)?;
        self.logger
            .debug_builder("request")
            .field("endpoint", endpoint.name())
            .field("path", path.clone())
            .emit();

        match self.client.send_json(&self.transport, request).await {
            Ok(reply) => Ok(reply),
            Err(err) => {
                self.logger
                    .error_builder("request failed")
                    .field("endpoint", endpoint.name())
                    .field("path", path)
                    .field("error", err.to_string())
                    .emit();
                Err(err.into())
            }
        }
    }
}
