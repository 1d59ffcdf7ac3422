//! HTTP client module
//!
//! Provides the async client the pager fetches through: slash-trimmed URL
//! joining against a base URL, default headers on every request, a fixed
//! 60-second request timeout, and a fixed-delay retry loop for server
//! errors (status >= 500).

mod client;

pub use client::{HttpClient, HttpClientConfig, RequestConfig, RetryPolicy, REQUEST_TIMEOUT};
