//! Catalogue scraping module
//!
//! This module provides functionality for crawling a paginated product
//! catalogue and extracting one raw, text-valued record per product block.

mod config;
mod crawl;
mod error;
mod extract;
mod fetch;

pub use config::ScrapeConfig;
pub use crawl::crawl_catalogue;
pub use error::ScrapeError;
pub use extract::RecordExtractor;
pub use fetch::{HttpFetcher, PageFetcher};

use serde::{Deserialize, Serialize};

/// One product block as scraped, before any field coercion
///
/// All fields are carried as text exactly as they appeared on the page; the
/// normalizer owns every decision about what the text means. Records carry no
/// cross-page identity, so the same product appearing on two pages yields two
/// records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Product title, from the heading link's title attribute
    #[serde(rename = "Title")]
    pub title: String,

    /// Price as displayed, currency symbol included
    #[serde(rename = "Price")]
    pub price_text: String,

    /// Word-form rating class token, empty when absent
    #[serde(rename = "Rating")]
    pub rating_text: String,

    /// Trimmed stock-status text, empty when absent
    #[serde(rename = "Availability")]
    pub availability_text: String,
}
