//! HTTP client with uniform status handling
//!
//! Provides the single request path shared by all fetchers:
//! - Base URL joining and default headers
//! - Per-request timeout, classified as `Error::Timeout`
//! - Non-success statuses mapped to `Error::RequestFailed`
//! - JSON body decoding with malformed bodies reported as such

use crate::error::{Error, Result};
use bytes::Bytes;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Configuration for the HTTP client
#[derive(Clone)]
pub struct HttpClientConfig {
    /// Base URL for relative request paths
    pub base_url: Option<String>,
    /// Request timeout
    pub timeout: Duration,
    /// Default headers for all requests, in insertion order
    pub default_headers: Vec<(String, String)>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
            default_headers: Vec::new(),
            user_agent: format!("dronelogbook-rs/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }

    /// Value of a default header, matched case-insensitively
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.default_headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

// Header values carry the API key, so only names are printed.
impl std::fmt::Debug for HttpClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let header_names: Vec<&str> = self.default_headers.iter().map(|(k, _)| k.as_str()).collect();
        f.debug_struct("HttpClientConfig")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("default_headers", &header_names)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.push((key.into(), value.into()));
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// Configuration for a single request
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// Query parameters
    pub query: Vec<(String, String)>,
    /// Request headers
    pub headers: Vec<(String, String)>,
    /// URL-encoded form body
    pub form: Vec<(String, String)>,
    /// Override timeout for this request
    pub timeout: Option<Duration>,
}

impl RequestConfig {
    /// Create a new request config
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Add a form field
    #[must_use]
    pub fn form_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.form.push((key.into(), value.into()));
        self
    }

    /// Set timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// HTTP client issuing one request per call
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { client, config })
    }

    /// Get the client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Make a GET request
    pub async fn get(&self, url: &str) -> Result<Response> {
        self.request(Method::GET, url, RequestConfig::default())
            .await
    }

    /// Make a GET request with config
    pub async fn get_with_config(&self, url: &str, config: RequestConfig) -> Result<Response> {
        self.request(Method::GET, url, config).await
    }

    /// Make a POST request with config
    pub async fn post_with_config(&self, url: &str, config: RequestConfig) -> Result<Response> {
        self.request(Method::POST, url, config).await
    }

    /// Make a generic request
    ///
    /// Any status outside 2xx is returned as `Error::RequestFailed`
    /// carrying the status code and the requested endpoint.
    pub async fn request(
        &self,
        method: Method,
        url: &str,
        config: RequestConfig,
    ) -> Result<Response> {
        let full_url = self.build_url(url);
        let timeout = config.timeout.unwrap_or(self.config.timeout);

        let mut req = self.client.request(method.clone(), &full_url);

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        for (key, value) in &config.headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if !config.query.is_empty() {
            req = req.query(&config.query);
        }

        if !config.form.is_empty() {
            req = req.form(&config.form);
        }

        req = req.timeout(timeout);

        let response = req
            .send()
            .await
            .map_err(|e| classify_transport_error(e, timeout))?;

        let status = response.status();
        if !status.is_success() {
            debug!("Request failed: {} {} -> {}", method, full_url, status.as_u16());
            return Err(Error::request_failed(status.as_u16(), url));
        }

        debug!("Request succeeded: {} {}", method, full_url);
        Ok(response)
    }

    /// Make a request and parse the JSON response
    pub async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        config: RequestConfig,
    ) -> Result<T> {
        let timeout = config.timeout.unwrap_or(self.config.timeout);
        let response = self.request(method, url, config).await?;
        let body = response
            .bytes()
            .await
            .map_err(|e| classify_transport_error(e, timeout))?;

        serde_json::from_slice(&body)
            .map_err(|e| Error::malformed(format!("invalid JSON body from {url}: {e}")))
    }

    /// Make a GET request and parse the JSON response
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        self.request_json(Method::GET, url, RequestConfig::default())
            .await
    }

    /// Make a GET request with config and parse the JSON response
    pub async fn get_json_with_config<T: DeserializeOwned>(
        &self,
        url: &str,
        config: RequestConfig,
    ) -> Result<T> {
        self.request_json(Method::GET, url, config).await
    }

    /// Make a POST request and return the raw response body
    pub async fn post_bytes(&self, url: &str, config: RequestConfig) -> Result<Bytes> {
        let timeout = config.timeout.unwrap_or(self.config.timeout);
        let response = self.post_with_config(url, config).await?;
        response
            .bytes()
            .await
            .map_err(|e| classify_transport_error(e, timeout))
    }

    /// Build full URL from path
    pub fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        match &self.config.base_url {
            Some(base) => {
                let base = base.trim_end_matches('/');
                let path = path.trim_start_matches('/');
                format!("{base}/{path}")
            }
            None => path.to_string(),
        }
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Map a reqwest failure to a timeout or generic transport error
fn classify_transport_error(err: reqwest::Error, timeout: Duration) -> Error {
    if err.is_timeout() {
        Error::Timeout {
            timeout_ms: timeout.as_millis() as u64,
        }
    } else {
        Error::Http(err)
    }
}
