use std::time::Duration;

use url::Url;

use crate::catalog::DEFAULT_CATALOG_URL;
use crate::error::CatalogError;
use crate::filter::{DefaultOrder, SortMode};

/// Options for a browse session
#[derive(Debug, Clone)]
pub struct BrowseConfig {
    /// Catalog endpoint returning a JSON array of show previews
    pub endpoint: String,
    /// Request timeout for the catalog fetch (None = transport default)
    pub timeout: Option<Duration>,
    /// Meaning of [`SortMode::Default`]
    pub default_order: DefaultOrder,
    /// Sort mode selected when the session starts
    pub initial_sort: SortMode,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CATALOG_URL.to_string(),
            timeout: Some(Duration::from_secs(30)),
            default_order: DefaultOrder::FetchOrder,
            initial_sort: SortMode::Default,
        }
    }
}

impl BrowseConfig {
    /// Check that the endpoint is an http(s) URL
    pub fn endpoint_url(&self) -> Result<Url, CatalogError> {
        let url = Url::parse(&self.endpoint)?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(CatalogError::UnsupportedScheme {
                scheme: scheme.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_public_catalog() {
        let config = BrowseConfig::default();
        assert_eq!(config.endpoint, DEFAULT_CATALOG_URL);
        assert_eq!(config.default_order, DefaultOrder::FetchOrder);
        assert_eq!(config.initial_sort, SortMode::Default);
        assert!(config.endpoint_url().is_ok());
    }

    #[test]
    fn endpoint_must_be_http() {
        let config = BrowseConfig {
            endpoint: "ftp://example.com/shows".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.endpoint_url(),
            Err(CatalogError::UnsupportedScheme { scheme }) if scheme == "ftp"
        ));

        let config = BrowseConfig {
            endpoint: "shows.json".to_string(),
            ..Default::default()
        };
        assert!(config.endpoint_url().is_err());
    }
}
