use thiserror::Error;

/// Errors that can occur when fetching or decoding the show catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to fetch catalog from {url}: {source}")]
    FetchFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Invalid catalog endpoint: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Unsupported endpoint scheme '{scheme}' (expected http or https)")]
    UnsupportedScheme { scheme: String },

    #[error("Catalog response is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Catalog response is not a JSON array (got {found})")]
    NotAnArray { found: &'static str },
}

/// Errors caused by user input to the browser controls
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Unknown sort mode '{0}' (expected one of: default, title-asc, title-desc, date-asc, date-desc)")]
    UnknownSortMode(String),

    #[error("Unknown genre '{0}'")]
    UnknownGenre(String),

    #[error("Unknown default order '{0}' (expected fetch or title)")]
    UnknownDefaultOrder(String),

    #[error("Unknown layout '{0}' (expected list or carousel)")]
    UnknownLayout(String),
}
