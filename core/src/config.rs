//! Client configuration.
//!
//! # Design
//! One `ApiConfig` per client session, constructed once and immutable
//! afterwards. Every request URL is derived from it; nothing in the crate
//! reads ambient globals or environment variables. The `/v1` version prefix
//! belongs to the config, not to callers, so endpoint names stay short
//! (`"resources"`, `"values"`, …).

use url::Url;

use crate::error::ApiError;

/// Path segment identifying the API version. Prepended to every endpoint.
pub const API_VERSION: &str = "v1";

/// Immutable per-session configuration: where the remote API lives.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base: Url,
}

impl ApiConfig {
    /// Parse and normalize the base URL. A trailing slash is accepted and
    /// ignored; the URL must be absolute and hierarchical (http or https).
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| ApiError::InvalidBaseUrl(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(format!(
                "{base_url}: not a hierarchical URL"
            )));
        }
        Ok(Self { base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let config = ApiConfig::new("http://localhost:3000/").unwrap();
        assert_eq!(config.base().as_str(), "http://localhost:3000/");
        let config = ApiConfig::new("http://localhost:3000").unwrap();
        assert_eq!(config.base().as_str(), "http://localhost:3000/");
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            ApiConfig::new("not a url"),
            Err(ApiError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn rejects_non_hierarchical_urls() {
        assert!(matches!(
            ApiConfig::new("mailto:someone@example.org"),
            Err(ApiError::InvalidBaseUrl(_))
        ));
    }
}
