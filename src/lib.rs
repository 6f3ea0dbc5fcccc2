//! # stacks - catalogue scraping and dataset pipeline
//!
//! This crate scrapes a paginated book catalogue into a raw, text-valued
//! table, normalizes the text fields into typed numeric columns, and emits a
//! clean tabular dataset ready for statistics and reporting.
//!
//! ## Features
//!
//! - Fixed-range page crawling with per-page failure recovery
//! - CSS-selector record extraction, one record per product block
//! - Explicit field coercion (price, rating, stock) with named outcomes for
//!   missing versus defaulted values
//! - CSV persistence of both the raw intermediate and the clean table, with
//!   header-schema validation on read
//! - Describe-style summaries and top-N listings over the clean table
//! - Async API with Tokio
//!
//! ## Example
//!
//! ```rust,no_run
//! use stacks::normalize::normalize_records;
//! use stacks::scrape::{crawl_catalogue, HttpFetcher, ScrapeConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ScrapeConfig::builder().page_range(1, 50).build();
//!     let fetcher = HttpFetcher::new(&config)?;
//!
//!     let raw = crawl_catalogue(&fetcher, &config).await?;
//!     let (clean, report) = normalize_records(&raw);
//!
//!     println!("kept {} of {} records", report.kept, report.input);
//!     for record in clean.iter().take(5) {
//!         println!("{}: £{:.2}", record.title, record.price);
//!     }
//!     Ok(())
//! }
//! ```

mod error;

pub mod dataset;
pub mod normalize;
pub mod scrape;
pub mod stats;

pub use error::Error;

/// Re-export of the crate's error types for public use
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::error::Result;
}
