//! Error types for the stacks crate

use thiserror::Error;

/// Result type for stacks operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for stacks operations
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV read/write error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Filesystem error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Scraping error
    #[error("Scrape error: {0}")]
    Scrape(String),

    /// Dataset error
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Other errors
    #[error("{0}")]
    Other(String),
}
