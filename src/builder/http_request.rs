use std::collections::BTreeMap;
use std::fmt;

pub const DEFAULT_METHOD: &str = "GET";
pub const DEFAULT_TIMEOUT_MS: u32 = 30_000;

/// An immutable HTTP request description. Only [`HttpRequestBuilder`] creates one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    url: String,
    method: String,
    headers: BTreeMap<String, String>,
    query_params: BTreeMap<String, String>,
    body: Option<String>,
    timeout_ms: u32,
}

impl HttpRequest {
    pub fn builder(url: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(url)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    pub fn query_params(&self) -> &BTreeMap<String, String> {
        &self.query_params
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }
}

impl fmt::Display for HttpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HttpRequest{{url='{}', method='{}', headers={:?}, queryParams={:?}, body={:?}, timeout={}}}",
            self.url, self.method, self.headers, self.query_params, self.body, self.timeout_ms
        )
    }
}

#[derive(Debug, Clone)]
#[must_use = "a builder does nothing until .build() is called"]
pub struct HttpRequestBuilder {
    url: String,
    method: String,
    headers: BTreeMap<String, String>,
    query_params: BTreeMap<String, String>,
    body: Option<String>,
    timeout_ms: u32,
}

impl HttpRequestBuilder {
    // The url is the only required field; everything else starts at its default.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: DEFAULT_METHOD.to_string(),
            headers: BTreeMap::new(),
            query_params: BTreeMap::new(),
            body: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Adding the same header name twice keeps the last value.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.insert(key.into(), value.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn build(&self) -> HttpRequest {
        HttpRequest {
            url: self.url.clone(),
            method: self.method.clone(),
            headers: self.headers.clone(),
            query_params: self.query_params.clone(),
            body: self.body.clone(),
            timeout_ms: self.timeout_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let request = HttpRequest::builder("https://api.example.com").build();

        assert_eq!(request.url(), "https://api.example.com");
        assert_eq!(request.method(), "GET");
        assert!(request.headers().is_empty());
        assert!(request.query_params().is_empty());
        assert_eq!(request.body(), None);
        assert_eq!(request.timeout_ms(), 30_000);
    }

    #[test]
    fn test_full_configuration() {
        let request = HttpRequest::builder("https://api.example.com/register")
            .method("POST")
            .header("Content-Type", "application/json")
            .header("Authorization", "Bearer token")
            .query_param("key", "value")
            .body(r#"{ "key": "value" }"#)
            .timeout_ms(5000)
            .build();

        assert_eq!(request.method(), "POST");
        assert_eq!(request.headers().len(), 2);
        assert_eq!(request.query_params()["key"], "value");
        assert_eq!(request.body(), Some(r#"{ "key": "value" }"#));
        assert_eq!(request.timeout_ms(), 5000);
    }

    #[test]
    fn test_repeated_header_overwrites() {
        let request = HttpRequest::builder("https://example.com")
            .header("Authorization", "old")
            .header("Authorization", "new")
            .build();

        assert_eq!(request.headers().len(), 1);
        assert_eq!(request.headers()["Authorization"], "new");
    }

    #[test]
    fn test_build_twice_gives_independent_values() {
        let builder = HttpRequest::builder("https://example.com").method("PUT");
        let first = builder.build();
        let second = builder.build();

        assert_eq!(first, second);
        let extended = builder.header("X-Trace", "1").build();
        assert!(first.headers().is_empty());
        assert_eq!(extended.headers().len(), 1);
    }

    #[test]
    fn test_display_mentions_every_field() {
        let rendered = HttpRequest::builder("https://example.com")
            .body("payload")
            .build()
            .to_string();

        assert!(rendered.starts_with("HttpRequest{url='https://example.com'"));
        assert!(rendered.contains("method='GET'"));
        assert!(rendered.contains("body=Some(\"payload\")"));
        assert!(rendered.ends_with("timeout=30000}"));
    }
}
