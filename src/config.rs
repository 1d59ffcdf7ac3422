//! Runtime settings resolved from the environment
//!
//! All configuration comes from `REFTAB_*` environment variables, resolved
//! once at startup into an explicit [`Settings`] value that is passed to the
//! components that need it. Nothing reads the environment after startup.

use crate::error::{Error, Result};
use crate::types::StringMap;

/// API root URL (required)
pub const ENV_BASE_URL: &str = "REFTAB_BASE_URL";

/// Public half of the credential pair, sent as `X-Public-Key`
pub const ENV_PUBLIC_KEY: &str = "REFTAB_PUBLIC_KEY";

/// Secret half of the credential pair, sent as `X-Secret-Key`
pub const ENV_SECRET_KEY: &str = "REFTAB_SECRET_KEY";

/// Optional JSON object of extra headers merged into every request
pub const ENV_HEADERS: &str = "REFTAB_HEADERS";

/// Header name carrying the public key
pub const HEADER_PUBLIC_KEY: &str = "X-Public-Key";

/// Header name carrying the secret key
pub const HEADER_SECRET_KEY: &str = "X-Secret-Key";

/// Immutable runtime settings for one invocation
#[derive(Debug, Clone)]
pub struct Settings {
    /// API root, e.g. `https://www.reftab.com/api`
    pub base_url: String,
    /// Public API key
    pub public_key: String,
    /// Secret API key
    pub secret_key: String,
    /// Extra headers from `REFTAB_HEADERS`, already parsed
    pub extra_headers: StringMap,
}

impl Settings {
    /// Resolve settings from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base_url = lookup(ENV_BASE_URL).unwrap_or_default();
        if base_url.is_empty() {
            return Err(Error::missing_env(ENV_BASE_URL));
        }

        let settings = Self {
            base_url,
            public_key: lookup(ENV_PUBLIC_KEY).unwrap_or_default(),
            secret_key: lookup(ENV_SECRET_KEY).unwrap_or_default(),
            extra_headers: lookup(ENV_HEADERS)
                .map(|raw| parse_extra_headers(&raw))
                .unwrap_or_default(),
        };

        // The credential check runs on the merged map, so an entry from
        // REFTAB_HEADERS can stand in for either key.
        let headers = settings.headers();
        if header_missing(&headers, HEADER_PUBLIC_KEY) || header_missing(&headers, HEADER_SECRET_KEY)
        {
            return Err(Error::config(format!(
                "missing {ENV_PUBLIC_KEY} or {ENV_SECRET_KEY}"
            )));
        }

        Ok(settings)
    }

    /// Full header map for outgoing requests
    ///
    /// Extra entries win on key collision, including over the two credential
    /// headers.
    pub fn headers(&self) -> StringMap {
        let mut headers = StringMap::new();
        headers.insert(HEADER_PUBLIC_KEY.to_string(), self.public_key.clone());
        headers.insert(HEADER_SECRET_KEY.to_string(), self.secret_key.clone());
        headers.extend(self.extra_headers.clone());
        headers
    }
}

/// Parse the `REFTAB_HEADERS` value
///
/// Anything that does not parse as a string-to-string JSON object is ignored
/// rather than surfaced; the variable is optional and a bad value must not
/// fail the run.
fn parse_extra_headers(raw: &str) -> StringMap {
    serde_json::from_str(raw).unwrap_or_default()
}

fn header_missing(headers: &StringMap, name: &str) -> bool {
    headers.get(name).is_none_or(String::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_missing_base_url() {
        let err = Settings::from_lookup(env(&[
            (ENV_PUBLIC_KEY, "pk"),
            (ENV_SECRET_KEY, "sk"),
        ]))
        .unwrap_err();

        assert!(err.to_string().contains("REFTAB_BASE_URL"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let err = Settings::from_lookup(env(&[
            (ENV_BASE_URL, ""),
            (ENV_PUBLIC_KEY, "pk"),
            (ENV_SECRET_KEY, "sk"),
        ]))
        .unwrap_err();

        assert!(matches!(err, Error::MissingEnvVar { .. }));
    }

    #[test]
    fn test_missing_credentials() {
        let err = Settings::from_lookup(env(&[
            (ENV_BASE_URL, "https://api.example.com"),
            (ENV_PUBLIC_KEY, "pk"),
        ]))
        .unwrap_err();

        assert!(err.to_string().contains(ENV_SECRET_KEY));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_headers_contain_credentials() {
        let settings = Settings::from_lookup(env(&[
            (ENV_BASE_URL, "https://api.example.com"),
            (ENV_PUBLIC_KEY, "pk"),
            (ENV_SECRET_KEY, "sk"),
        ]))
        .unwrap();

        let headers = settings.headers();
        assert_eq!(headers.get(HEADER_PUBLIC_KEY), Some(&"pk".to_string()));
        assert_eq!(headers.get(HEADER_SECRET_KEY), Some(&"sk".to_string()));
    }

    #[test]
    fn test_extra_headers_merged() {
        let settings = Settings::from_lookup(env(&[
            (ENV_BASE_URL, "https://api.example.com"),
            (ENV_PUBLIC_KEY, "pk"),
            (ENV_SECRET_KEY, "sk"),
            (ENV_HEADERS, r#"{"X-Tenant": "acme"}"#),
        ]))
        .unwrap();

        assert_eq!(
            settings.headers().get("X-Tenant"),
            Some(&"acme".to_string())
        );
    }

    #[test]
    fn test_invalid_extra_headers_ignored() {
        let settings = Settings::from_lookup(env(&[
            (ENV_BASE_URL, "https://api.example.com"),
            (ENV_PUBLIC_KEY, "pk"),
            (ENV_SECRET_KEY, "sk"),
            (ENV_HEADERS, "not json at all"),
        ]))
        .unwrap();

        assert!(settings.extra_headers.is_empty());
    }

    #[test]
    fn test_non_string_extra_header_values_ignored() {
        let settings = Settings::from_lookup(env(&[
            (ENV_BASE_URL, "https://api.example.com"),
            (ENV_PUBLIC_KEY, "pk"),
            (ENV_SECRET_KEY, "sk"),
            (ENV_HEADERS, r#"{"X-Retries": 3}"#),
        ]))
        .unwrap();

        assert!(settings.extra_headers.is_empty());
    }

    #[test]
    fn test_extra_headers_override_credentials() {
        let settings = Settings::from_lookup(env(&[
            (ENV_BASE_URL, "https://api.example.com"),
            (ENV_PUBLIC_KEY, "pk"),
            (ENV_SECRET_KEY, "sk"),
            (ENV_HEADERS, r#"{"X-Public-Key": "override"}"#),
        ]))
        .unwrap();

        assert_eq!(
            settings.headers().get(HEADER_PUBLIC_KEY),
            Some(&"override".to_string())
        );
    }

    #[test]
    fn test_extra_headers_satisfy_credential_check() {
        // No REFTAB_SECRET_KEY, but the merged map carries X-Secret-Key.
        let settings = Settings::from_lookup(env(&[
            (ENV_BASE_URL, "https://api.example.com"),
            (ENV_PUBLIC_KEY, "pk"),
            (ENV_HEADERS, r#"{"X-Secret-Key": "from-extra"}"#),
        ]))
        .unwrap();

        assert_eq!(
            settings.headers().get(HEADER_SECRET_KEY),
            Some(&"from-extra".to_string())
        );
    }
}
