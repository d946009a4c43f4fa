//! Test transports and page fixtures.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use edge_observability::{LogLevel, LogSink, PageId, StructuredLogger};
use futures::channel::oneshot;
use turbo_data::{FetchError, Request, Response, Transport};

use crate::config::StorefrontConfig;
use crate::dom::AttributeRow;
use crate::memory::{Element, MemoryDocument};
use crate::PageContext;

pub const PRODUCT_URL: &str = "https://shop.test/products/tee/";
pub const CART_URL: &str = "https://shop.test/cart/";
pub const ROW_CLASS: &str = "list-group-item d-flex justify-content-between align-items-center";

/// Replies from a queue, in order, and records every request.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: RefCell<VecDeque<Result<Response, FetchError>>>,
    requests: RefCell<Vec<Request>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(self, body: serde_json::Value) -> Self {
        self.with_status(200, body)
    }

    pub fn with_status(self, status: u16, body: serde_json::Value) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Ok(Response::json_with_status(status, &body)));
        self
    }

    pub fn with_failure(self, message: &str) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Err(FetchError::Transport(message.to_string())));
        self
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: Request) -> Result<Response, FetchError> {
        self.requests.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Transport("no scripted reply".to_string())))
    }
}

/// Holds every request until the test releases it, so responses can be
/// delivered in any order.
#[derive(Default)]
pub struct GatedTransport {
    waiting: RefCell<Vec<(String, oneshot::Sender<Response>)>>,
    requests: RefCell<Vec<Request>>,
}

impl GatedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer the pending request whose path ends with `path_suffix`.
    pub fn release(&self, path_suffix: &str, body: serde_json::Value) -> bool {
        let position = self
            .waiting
            .borrow()
            .iter()
            .position(|(path, _)| path.ends_with(path_suffix));
        match position {
            Some(i) => {
                let (_, gate) = self.waiting.borrow_mut().remove(i);
                gate.send(Response::json_ok(&body)).is_ok()
            }
            None => false,
        }
    }

    pub fn pending(&self) -> usize {
        self.waiting.borrow().len()
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for GatedTransport {
    async fn send(&self, request: Request) -> Result<Response, FetchError> {
        let (gate, released) = oneshot::channel();
        self.waiting
            .borrow_mut()
            .push((request.path().to_string(), gate));
        self.requests.borrow_mut().push(request);
        released
            .await
            .map_err(|_| FetchError::Transport("gate dropped".to_string()))
    }
}

/// Logger recording into memory, debug and up.
pub fn logger() -> StructuredLogger {
    StructuredLogger::new(PageId::from_string("page-test"))
        .with_min_level(LogLevel::Debug)
        .with_sink(LogSink::memory())
}

/// Bind `dom` with the default config.
pub fn context<T: Transport>(dom: MemoryDocument, transport: T) -> PageContext<MemoryDocument, T> {
    PageContext::new(StorefrontConfig::default(), dom, transport, logger())
        .expect("fixture page binds")
}

pub fn scripted(transport: ScriptedTransport) -> Rc<ScriptedTransport> {
    Rc::new(transport)
}

/// Product detail page for the "TEE" product (5 in stock, Red/M).
pub fn product_page() -> MemoryDocument {
    MemoryDocument::new()
        .with_location(PRODUCT_URL)
        .with_cookie("sessionid=abc; csrftoken=tok123")
        .with_element("cart-items", Element::new().with_text("0"))
        .with_element(
            "product-quantity",
            Element::new().with_value("1").with_attribute("max", "5"),
        )
        .with_element("product-title", Element::new().with_text("Tee"))
        .with_element(
            "image-active",
            Element::new().with_attribute("src", "/media/tee.png"),
        )
        .with_element("product-sku", Element::new().with_value("TEE"))
        .with_element("variantSelect", Element::new().with_value("TEE"))
        .with_element("product-price", Element::new().with_text("$20.00"))
        .with_element("old-price", Element::new())
        .with_element(
            "stock",
            Element::new()
                .with_text("In Stock - 5 available")
                .with_attribute("data-stock", "5"),
        )
        .with_element(
            "thumbnail-primary",
            Element::new()
                .with_class("thumbnail active")
                .with_attribute("src", "/media/tee.png"),
        )
        .with_element(
            "thumbnail-back",
            Element::new()
                .with_class("thumbnail")
                .with_attribute("src", "/media/tee-back.png"),
        )
        .with_element(
            "variant-list",
            Element::new().with_rows(
                ROW_CLASS,
                vec![AttributeRow::new("Color", "Red"), AttributeRow::new("Size", "M")],
            ),
        )
        .with_element("categorySelect", Element::new().with_value("All"))
        .with_element("productContainer", Element::new().with_text("initial grid"))
        .with_element("category-status", Element::new())
        .with_element("promoCode", Element::new())
        .with_element("applyBtn", Element::new().with_text("Apply"))
        .with_element("message", Element::new().with_class("message"))
}

/// Cart page with one line, `TEE-M` x2 (4 in stock).
pub fn cart_page() -> MemoryDocument {
    MemoryDocument::new()
        .with_location(CART_URL)
        .with_cookie("csrftoken=tok123")
        .with_element("cart-items", Element::new().with_text("1"))
        .with_element("items-count", Element::new().with_text("Shopping Cart : 1 items"))
        .with_element("subtotal-items", Element::new().with_text("Subtotal (2) units"))
        .with_element("subtotal-price", Element::new().with_text("$40.00"))
        .with_element("vat", Element::new().with_text("$8.00"))
        .with_element("shipping", Element::new().with_text("$5.00"))
        .with_element("final-total", Element::new().with_text("$53.00"))
        .with_element("row-TEE-M", Element::new().with_attribute("data-sku", "TEE-M"))
        .with_element(
            "quantity-TEE-M",
            Element::new().with_value("2").with_attribute("max", "4"),
        )
        .with_element("title-TEE-M", Element::new().with_text("Tee (M)"))
        .with_element("checkout-btn", Element::new().with_text("Proceed to Checkout"))
}

/// Checkout page with two payment methods, card selected.
pub fn checkout_page() -> MemoryDocument {
    MemoryDocument::new()
        .with_location("https://shop.test/checkout/")
        .with_cookie("csrftoken=tok123")
        .with_element("cardNumber", Element::new())
        .with_element("expiry", Element::new())
        .with_element("cvv", Element::new())
        .with_element(
            "pm-card",
            Element::new()
                .with_class("payment-method active")
                .with_attribute("data-method", "card"),
        )
        .with_element(
            "pm-paypal",
            Element::new()
                .with_class("payment-method")
                .with_attribute("data-method", "paypal"),
        )
        .with_element("place-order", Element::new().with_text("Place Order"))
        .with_element("resultModal", Element::new().with_class("modal"))
        .with_element("modalIcon", Element::new())
        .with_element("modalTitle", Element::new())
        .with_element("modalMessage", Element::new())
        .with_element("orderNumber", Element::new())
        .with_element("file-upload", Element::new())
        .with_element("filename", Element::new())
        .with_element("profile-pic", Element::new())
}

/// A `update-variant` reply body.
pub fn variant_body(message: &str, title: &str, old_price: &str, stock: u32) -> serde_json::Value {
    serde_json::json!({
        "status": "success",
        "message": message,
        "title": title,
        "price": "25.00",
        "old_price": old_price,
        "stock": stock,
        "image": format!("/media/{}.png", title.to_lowercase()),
        "attributes": { "Color": title, "Size": "L" }
    })
}
