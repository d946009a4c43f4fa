//! Cookie lookup for the CSRF token.

/// Name of the cookie the backend stores its CSRF token in.
pub const CSRF_COOKIE: &str = "csrftoken";

/// Header the backend expects the CSRF token echoed in.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Read a cookie value from a `document.cookie` style string.
///
/// Entries are `;`-separated with optional whitespace. The value is
/// percent-decoded; a value that fails to decode is returned verbatim.
pub fn read_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .map(str::trim)
        .filter_map(|entry| entry.split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| {
            let value = value.trim();
            urlencoding::decode(value)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| value.to_string())
        })
}
