//! Error types for the scrape module

use crate::error::Error as CrateError;
use thiserror::Error;

/// Error type for scraping operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("request for {url} failed with status {status}")]
    Status {
        /// URL the request was made to
        url: String,
        /// HTTP status code returned
        status: u16,
    },

    /// CSS selector parsing error
    #[error("selector parse error: {0}")]
    Selector(String),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl From<ScrapeError> for CrateError {
    fn from(err: ScrapeError) -> Self {
        match err {
            ScrapeError::Http(e) => CrateError::Http(e),
            _ => CrateError::Scrape(err.to_string()),
        }
    }
}
