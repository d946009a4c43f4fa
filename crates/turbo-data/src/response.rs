//! HTTP response handling.

use crate::FetchError;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;

/// An HTTP response as delivered by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The response headers.
    pub headers: BTreeMap<String, String>,
    /// The response body.
    pub body: Vec<u8>,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, headers: BTreeMap<String, String>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// A 200 response carrying a JSON document.
    pub fn json_ok(value: &serde_json::Value) -> Self {
        Self::json_with_status(200, value)
    }

    /// A response with the given status carrying a JSON document.
    pub fn json_with_status(status: u16, value: &serde_json::Value) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        Self::new(status, headers, value.to_string().into_bytes())
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get the response body as text.
    pub fn text(&self) -> Result<String, FetchError> {
        String::from_utf8(self.body.clone())
            .map_err(|e| FetchError::Decode(format!("Invalid UTF-8: {}", e)))
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        serde_json::from_slice(&self.body).map_err(|e| FetchError::Decode(e.to_string()))
    }

    /// Get a header value (case-insensitive).
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Convert to a Result, returning an error for non-2xx status codes.
    ///
    /// The error message is the body text, which for this backend is a JSON
    /// document with a `message` or `error` field.
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.is_success() {
            Ok(self)
        } else {
            let message = self.text().unwrap_or_else(|_| "Unknown error".to_string());
            Err(FetchError::Http {
                status: self.status,
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_response(status: u16, body: &[u8]) -> Response {
        Response::new(status, BTreeMap::new(), body.to_vec())
    }

    #[test]
    fn test_response_is_success() {
        assert!(make_response(200, b"").is_success());
        assert!(make_response(299, b"").is_success());
        assert!(!make_response(199, b"").is_success());
        assert!(!make_response(400, b"").is_success());
    }

    #[test]
    fn test_response_json() {
        let resp = Response::json_ok(&serde_json::json!({ "status": "success", "count": 2 }));
        let value: serde_json::Value = resp.json().unwrap();
        assert_eq!(value["count"], 2);
        assert_eq!(resp.header("content-type"), Some("application/json"));
    }

    #[test]
    fn test_response_json_invalid() {
        let resp = make_response(200, b"<html>");
        let result: Result<serde_json::Value, _> = resp.json();
        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[test]
    fn test_response_text_invalid_utf8() {
        assert!(make_response(200, &[0xff, 0xfe]).text().is_err());
    }

    #[test]
    fn test_error_for_status_keeps_body() {
        let resp = make_response(400, br#"{"status":"error"}"#);
        match resp.error_for_status() {
            Err(FetchError::Http { status, message }) => {
                assert_eq!(status, 400);
                assert_eq!(message, r#"{"status":"error"}"#);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_error_for_status_success() {
        assert!(make_response(204, b"").error_for_status().is_ok());
    }
}
