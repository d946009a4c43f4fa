//! Request utilities for the storefront client.
//!
//! Every mutating call the storefront makes is a same-origin JSON POST that
//! echoes the CSRF cookie in a header. This crate builds those requests,
//! reads the cookie, and defines the [`Transport`] seam the page sends them
//! through.
//!
//! # Example
//!
//! ```rust,ignore
//! use turbo_data::{read_cookie, FetchClient, CSRF_COOKIE};
//!
//! let token = read_cookie(&document_cookie, CSRF_COOKIE).unwrap_or_default();
//! let client = FetchClient::new("https://shop.test/products/tee/")?
//!     .with_csrf("X-CSRFToken", token);
//!
//! let request = client.mutation("/cart/delete/TEE-M", &serde_json::json!({ "sku": "TEE-M" }))?;
//! let reply: DeleteReply = client.send_json(&transport, request).await?;
//! ```

mod cookie;
mod error;
mod request;
mod response;
mod sequence;
mod transport;

pub use cookie::{read_cookie, CSRF_COOKIE, CSRF_HEADER};
pub use error::FetchError;
pub use request::{Credentials, Method, Request, RequestBuilder};
pub use response::Response;
pub use sequence::{RequestSequencer, Ticket};
pub use transport::Transport;

use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

/// Percent-encode one path segment (SKU, category name, promo code).
pub fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

/// Client bound to the page it runs on.
///
/// Relative paths resolve against the page URL exactly like the browser's
/// `fetch` would, so `update-variant/SKU` on `/products/tee/` targets
/// `/products/tee/update-variant/SKU`.
#[derive(Debug, Clone)]
pub struct FetchClient {
    page_url: Url,
    csrf: Option<(String, String)>,
}

impl FetchClient {
    /// Create a client for the page at `page_url` (absolute).
    pub fn new(page_url: &str) -> Result<Self, FetchError> {
        let page_url = Url::parse(page_url)?;
        if page_url.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl(page_url.to_string()));
        }
        Ok(Self {
            page_url,
            csrf: None,
        })
    }

    /// Echo `token` in `header` on every request.
    pub fn with_csrf(mut self, header: impl Into<String>, token: impl Into<String>) -> Self {
        self.csrf = Some((header.into(), token.into()));
        self
    }

    /// The page's origin, e.g. `https://shop.test:8000`.
    pub fn origin(&self) -> String {
        self.page_url.origin().ascii_serialization()
    }

    /// The CSRF token in use, if any.
    pub fn csrf_token(&self) -> Option<&str> {
        self.csrf.as_ref().map(|(_, token)| token.as_str())
    }

    /// Resolve `path` against the page URL, refusing other origins.
    pub fn resolve(&self, path: &str) -> Result<Url, FetchError> {
        let url = self.page_url.join(path)?;
        if url.origin() != self.page_url.origin() {
            return Err(FetchError::CrossOrigin(url.to_string()));
        }
        Ok(url)
    }

    /// Start a POST to `path` with the CSRF header and same-origin credentials.
    pub fn post(&self, path: &str) -> Result<RequestBuilder, FetchError> {
        let url = self.resolve(path)?;
        let mut builder = RequestBuilder::new(Method::Post, url.as_str())
            .credentials(Credentials::SameOrigin);
        if let Some((header, token)) = &self.csrf {
            builder = builder.header(header.clone(), token.clone());
        }
        Ok(builder)
    }

    /// Build the mutation request for `path` carrying `payload` as JSON.
    pub fn mutation<T: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<Request, FetchError> {
        Ok(self.post(path)?.json(payload)?.build())
    }

    /// Send `request` and decode a 2xx JSON body.
    ///
    /// Transport failures, non-2xx statuses and undecodable bodies all come
    /// back as `Err`.
    pub async fn send_json<T, X>(&self, transport: &X, request: Request) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
        X: Transport + ?Sized,
    {
        let response = transport.send(request).await?;
        response.error_for_status()?.json()
    }
}

impl FetchError {
    /// The backend's `message` / `error` text carried by a non-2xx response.
    pub fn server_message(&self) -> Option<String> {
        let FetchError::Http { message, .. } = self else {
            return None;
        };
        let body: serde_json::Value = serde_json::from_str(message).ok()?;
        body.get("error")
            .or_else(|| body.get("message"))
            .and_then(|v| v.as_str())
            .map(String::from)
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchClient, FetchError, Request, Response, Transport};
}
