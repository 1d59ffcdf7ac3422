//! API resources
//!
//! The two collections this tool extracts. Each resource is a thin wrapper
//! selecting an endpoint path and forwarding the optional free-text filter
//! as the `q` query parameter.

use crate::error::Result;
use crate::http::HttpClient;
use crate::pager::Pager;
use crate::types::{JsonValue, StringMap};
use serde::Serialize;

/// The API collection to extract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    /// Asset records
    #[default]
    Assets,
    /// Location records
    Locations,
}

impl Resource {
    /// Endpoint path relative to the API root
    pub fn path(self) -> &'static str {
        match self {
            Resource::Assets => "assets",
            Resource::Locations => "locations",
        }
    }

    /// Resource name as it appears in CLI values and output
    pub fn as_str(self) -> &'static str {
        self.path()
    }

    /// Fetch every record of this resource, optionally filtered
    pub async fn fetch(
        self,
        client: &HttpClient,
        pager: &Pager,
        query: Option<&str>,
    ) -> Result<Vec<JsonValue>> {
        let mut params = StringMap::new();
        if let Some(q) = query.filter(|q| !q.is_empty()) {
            params.insert("q".to_string(), q.to_string());
        }
        pager.fetch_all(client, self.path(), &params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Resource::Assets.path(), "assets");
        assert_eq!(Resource::Locations.path(), "locations");
    }

    #[test]
    fn test_default_is_assets() {
        assert_eq!(Resource::default(), Resource::Assets);
    }

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_string(&Resource::Locations).unwrap();
        assert_eq!(json, "\"locations\"");
    }
}
