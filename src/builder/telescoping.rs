//! The telescoping-constructor anti-pattern.
//!
//! Each constructor adds one more positional parameter and forwards to the
//! next with a default. Call sites must pass `None` placeholders for every
//! field they don't care about, up to the one they do. Compare with
//! [`HttpRequestBuilder`](super::HttpRequestBuilder).

use std::collections::BTreeMap;

use super::http_request::{DEFAULT_METHOD, DEFAULT_TIMEOUT_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequestTelescoping {
    pub url: String,
    pub method: String,
    pub headers: BTreeMap<String, String>,
    pub query_params: BTreeMap<String, String>,
    pub body: Option<String>,
    pub timeout_ms: u32,
}

impl HttpRequestTelescoping {
    pub fn new(url: &str) -> Self {
        Self::with_method(url, DEFAULT_METHOD)
    }

    pub fn with_method(url: &str, method: &str) -> Self {
        Self::with_headers(url, method, None)
    }

    pub fn with_headers(
        url: &str,
        method: &str,
        headers: Option<BTreeMap<String, String>>,
    ) -> Self {
        Self::with_query(url, method, headers, None)
    }

    pub fn with_query(
        url: &str,
        method: &str,
        headers: Option<BTreeMap<String, String>>,
        query_params: Option<BTreeMap<String, String>>,
    ) -> Self {
        Self::with_body(url, method, headers, query_params, None)
    }

    pub fn with_body(
        url: &str,
        method: &str,
        headers: Option<BTreeMap<String, String>>,
        query_params: Option<BTreeMap<String, String>>,
        body: Option<&str>,
    ) -> Self {
        Self::with_timeout(url, method, headers, query_params, body, DEFAULT_TIMEOUT_MS)
    }

    // The only constructor that actually assigns fields.
    pub fn with_timeout(
        url: &str,
        method: &str,
        headers: Option<BTreeMap<String, String>>,
        query_params: Option<BTreeMap<String, String>>,
        body: Option<&str>,
        timeout_ms: u32,
    ) -> Self {
        Self {
            url: url.to_string(),
            method: method.to_string(),
            headers: headers.unwrap_or_default(),
            query_params: query_params.unwrap_or_default(),
            body: body.map(str::to_string),
            timeout_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::HttpRequest;

    #[test]
    fn test_short_constructor_defaults() {
        let request = HttpRequestTelescoping::new("https://api.example.com");
        assert_eq!(request.method, "GET");
        assert!(request.headers.is_empty());
        assert_eq!(request.body, None);
        assert_eq!(request.timeout_ms, 30_000);
    }

    #[test]
    fn test_placeholders_needed_to_reach_body() {
        let request = HttpRequestTelescoping::with_body(
            "https://api.example.com/submit",
            "POST",
            None,
            None,
            Some(r#"{"key":"value"}"#),
        );
        assert_eq!(request.method, "POST");
        assert_eq!(request.body.as_deref(), Some(r#"{"key":"value"}"#));
    }

    #[test]
    fn test_agrees_with_builder() {
        let headers = BTreeMap::from([("X-API-Key".to_string(), "secret".to_string())]);
        let telescoped = HttpRequestTelescoping::with_timeout(
            "https://api.example.com/config",
            "PUT",
            Some(headers),
            None,
            Some("config_data"),
            5000,
        );
        let built = HttpRequest::builder("https://api.example.com/config")
            .method("PUT")
            .header("X-API-Key", "secret")
            .body("config_data")
            .timeout_ms(5000)
            .build();

        assert_eq!(telescoped.url, built.url());
        assert_eq!(&telescoped.headers, built.headers());
        assert_eq!(telescoped.body.as_deref(), built.body());
        assert_eq!(telescoped.timeout_ms, built.timeout_ms());
    }
}
