//! Offset pagination
//!
//! The core loop of the tool: fetch a resource path page by page, advancing
//! an integer offset by the page size, until the server returns an empty or
//! short page. Records accumulate in server order; nothing is deduplicated
//! or re-ordered, and nothing fetched so far survives a mid-run error.

mod batch;

pub use batch::extract_batch;


use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};
use crate::types::{JsonValue, StringMap};
use std::time::Duration;
use tracing::{debug, info};

/// Offset-cursor pager over a list endpoint
#[derive(Debug, Clone)]
pub struct Pager {
    /// Page size requested per call; also the short-page threshold
    limit: u32,
    /// Pause between successful pages (skipped when zero)
    sleep: Duration,
}

impl Pager {
    /// Create a pager with the given page size and between-page sleep
    pub fn new(limit: u32, sleep: Duration) -> Self {
        Self { limit, sleep }
    }

    /// Fetch every record at `path` matching `params`
    ///
    /// Query parameters sent per call are `params` plus `limit` and
    /// `offset`. A page of exactly `limit` records always triggers one more
    /// fetch, so hitting the end of the data on a page boundary costs one
    /// extra round trip that returns an empty batch.
    pub async fn fetch_all(
        &self,
        client: &HttpClient,
        path: &str,
        params: &StringMap,
    ) -> Result<Vec<JsonValue>> {
        let mut out = Vec::new();
        let mut offset: u64 = 0;
        let mut pages: u32 = 0;

        loop {
            let mut query = params.clone();
            query.insert("limit".to_string(), self.limit.to_string());
            query.insert("offset".to_string(), offset.to_string());

            let body = client
                .get_json(path, &RequestConfig::new().with_query(query))
                .await?;
            let batch = extract_batch(body);

            debug!(
                "page at offset {} returned {} record(s)",
                offset,
                batch.len()
            );

            // An empty page is not appended; it only signals the end.
            if batch.is_empty() {
                break;
            }

            pages += 1;
            let short = batch.len() < self.limit as usize;
            out.extend(batch);

            if short {
                break;
            }

            offset += u64::from(self.limit);
            if !self.sleep.is_zero() {
                tokio::time::sleep(self.sleep).await;
            }
        }

        info!("fetched {} record(s) from {} in {} page(s)", out.len(), path, pages);
        Ok(out)
    }
}
