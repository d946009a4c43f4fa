//! HTTP request builder.

use crate::FetchError;
use serde::Serialize;
use std::collections::BTreeMap;

/// HTTP methods used by the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Post,
}

impl Method {
    /// Convert to HTTP method string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Post => "POST",
        }
    }
}

/// Credentials mode, mirroring the fetch API's `credentials` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Credentials {
    /// Send cookies only to the page's own origin.
    #[default]
    SameOrigin,
}

impl Credentials {
    pub fn as_str(&self) -> &'static str {
        match self {
            Credentials::SameOrigin => "same-origin",
        }
    }
}

/// A request ready to hand to a [`Transport`](crate::Transport).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    /// Absolute URL on the page origin.
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: Option<Vec<u8>>,
    pub credentials: Credentials,
}

impl Request {
    /// Get a header value (case-insensitive).
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Path component of the URL (everything after the authority).
    pub fn path(&self) -> &str {
        let rest = self
            .url
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or(&self.url);
        rest.find('/').map(|i| &rest[i..]).unwrap_or("/")
    }

    /// Decode the body as JSON.
    pub fn json_body(&self) -> Option<serde_json::Value> {
        self.body
            .as_deref()
            .and_then(|b| serde_json::from_slice(b).ok())
    }
}

/// A builder for constructing HTTP requests.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    url: String,
    headers: BTreeMap<String, String>,
    body: Option<Vec<u8>>,
    credentials: Credentials,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: BTreeMap::new(),
            body: None,
            credentials: Credentials::default(),
        }
    }

    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set the credentials mode.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: Serialize + ?Sized>(mut self, value: &T) -> Result<Self, FetchError> {
        let json = serde_json::to_vec(value).map_err(|e| FetchError::Encode(e.to_string()))?;
        self.headers
            .insert("Content-Type".to_string(), "application/json".to_string());
        self.body = Some(json);
        Ok(self)
    }

    /// Finish the request.
    pub fn build(self) -> Request {
        Request {
            method: self.method,
            url: self.url,
            headers: self.headers,
            body: self.body,
            credentials: self.credentials,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_sets_content_type_and_body() {
        let request = RequestBuilder::new(Method::Post, "https://shop.test/cart/delete/A1")
            .json(&serde_json::json!({ "sku": "A1" }))
            .unwrap()
            .build();

        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(request.json_body(), Some(serde_json::json!({ "sku": "A1" })));
        assert_eq!(request.credentials, Credentials::SameOrigin);
    }

    #[test]
    fn test_path() {
        let request = RequestBuilder::new(Method::Post, "https://shop.test:8000/cart/add/A/2").build();
        assert_eq!(request.path(), "/cart/add/A/2");

        let request = RequestBuilder::new(Method::Post, "https://shop.test").build();
        assert_eq!(request.path(), "/");
    }

    #[test]
    fn test_method_strings() {
        assert_eq!(Method::Post.as_str(), "POST");
        assert_eq!(Credentials::SameOrigin.as_str(), "same-origin");
    }
}
