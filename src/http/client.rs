//! HTTP client with fixed-delay retry on server errors
//!
//! Server errors (5xx) are transient from this tool's point of view: the
//! request is reissued unchanged after a fixed sleep, with no backoff
//! growth. Every other non-success status fails the run immediately, as do
//! transport errors and timeouts.

use crate::error::{Error, Result};
use crate::types::StringMap;
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Fixed per-request timeout; no timeout governs the overall run.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Retry policy for server errors
///
/// `max_attempts: None` retries until the server recovers. The absence of a
/// cap matches the upstream behavior this tool preserves; callers that want
/// a bound set one explicitly.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Delay between attempts
    pub delay: Duration,
    /// Maximum retry attempts, or `None` for unbounded
    pub max_attempts: Option<u32>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(200),
            max_attempts: None,
        }
    }
}

impl RetryPolicy {
    /// Unbounded retry with a fixed delay
    pub fn fixed(delay: Duration) -> Self {
        Self {
            delay,
            max_attempts: None,
        }
    }

    /// Cap the number of retry attempts
    #[must_use]
    pub fn with_max_attempts(mut self, max: u32) -> Self {
        self.max_attempts = Some(max);
        self
    }
}

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL for all requests
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Retry policy for 5xx responses
    pub retry: RetryPolicy,
    /// Headers sent with every request
    pub default_headers: StringMap,
    /// User agent string
    pub user_agent: String,
}

impl HttpClientConfig {
    /// Create a config for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut default_headers = StringMap::new();
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        Self {
            base_url: base_url.into(),
            timeout: REQUEST_TIMEOUT,
            retry: RetryPolicy::default(),
            default_headers,
            user_agent: format!("{}/{}", crate::NAME, crate::VERSION),
        }
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the retry policy
    #[must_use]
    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Merge headers into the default header set
    #[must_use]
    pub fn headers(mut self, headers: StringMap) -> Self {
        self.default_headers.extend(headers);
        self
    }
}

/// Configuration for a single request
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// Query parameters
    pub query: StringMap,
}

impl RequestConfig {
    /// Create a new request config
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Replace the query parameter map
    #[must_use]
    pub fn with_query(mut self, query: StringMap) -> Self {
        self.query = query;
        self
    }
}

/// HTTP client with fixed-delay retry on 5xx
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a client from a config
    pub fn with_config(config: HttpClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self { client, config }
    }

    /// Make a GET request, retrying on server errors
    pub async fn get(&self, path: &str, config: &RequestConfig) -> Result<Response> {
        let url = self.build_url(path);
        let mut attempt: u32 = 0;

        loop {
            let mut req = self.client.get(&url);

            for (key, value) in &self.config.default_headers {
                req = req.header(key.as_str(), value.as_str());
            }

            if !config.query.is_empty() {
                req = req.query(&config.query);
            }

            let response = req.send().await?;
            let status = response.status();

            if status.is_server_error() {
                if let Some(max) = self.config.retry.max_attempts {
                    if attempt >= max {
                        let body = response.text().await.unwrap_or_default();
                        return Err(Error::http_status(status.as_u16(), body));
                    }
                }
                attempt += 1;
                warn!(
                    "server error {} on GET {}, retrying in {:?} (attempt {})",
                    status.as_u16(),
                    url,
                    self.config.retry.delay,
                    attempt
                );
                tokio::time::sleep(self.config.retry.delay).await;
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(Error::http_status(status.as_u16(), body));
            }

            debug!("GET {} -> {}", url, status.as_u16());
            return Ok(response);
        }
    }

    /// Make a GET request and parse the body as JSON
    ///
    /// An empty body is `Ok(None)`; a body that is not valid JSON is an
    /// error.
    pub async fn get_json(&self, path: &str, config: &RequestConfig) -> Result<Option<Value>> {
        let response = self.get(path, config).await?;
        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(None);
        }
        let value = serde_json::from_str(&text)?;
        Ok(Some(value))
    }

    /// Join a path onto the base URL, trimming redundant slashes
    fn build_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
