//! # Scrape Configuration Module
//!
//! This module provides configuration options for the catalogue scraper,
//! including the page range to crawl and HTTP client settings. It uses a
//! builder pattern for flexible configuration.
//!
//! ## Key Components
//!
//! - `ScrapeConfig`: The main configuration struct with scraper parameters
//! - `ScrapeConfigBuilder`: Builder pattern implementation for easier configuration
//!
//! ## Features
//!
//! - Defaults matching the public books.toscrape.com catalogue
//! - Explicit inclusive page bounds (no "next page" auto-discovery)
//! - User-agent customization
//! - An explicit request timeout

use std::time::Duration;

use url::Url;

use crate::scrape::error::ScrapeError;

/// Configuration for the catalogue scraper
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Base URL of the catalogue, without the page suffix
    pub base_url: String,

    /// First page number to crawl (inclusive)
    pub first_page: u32,

    /// Last page number to crawl (inclusive)
    pub last_page: u32,

    /// User agent to use for requests
    pub user_agent: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: "http://books.toscrape.com/catalogue".to_string(),
            first_page: 1,
            last_page: 50,
            user_agent: format!("stacks-scraper/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: 10,
        }
    }
}

/// Builder for ScrapeConfig
#[derive(Debug, Default)]
pub struct ScrapeConfigBuilder {
    config: ScrapeConfig,
}

impl ScrapeConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: ScrapeConfig::default(),
        }
    }

    /// Set the base URL of the catalogue
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Set the inclusive page range to crawl
    pub fn page_range(mut self, first_page: u32, last_page: u32) -> Self {
        self.config.first_page = first_page;
        self.config.last_page = last_page;
        self
    }

    /// Set the user agent to use for requests
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout in seconds
    pub fn timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.config.timeout_secs = timeout_secs;
        self
    }

    /// Build the configuration
    pub fn build(self) -> ScrapeConfig {
        self.config
    }
}

impl ScrapeConfig {
    /// Create a new builder
    pub fn builder() -> ScrapeConfigBuilder {
        ScrapeConfigBuilder::new()
    }

    /// Get the request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Build the URL for one catalogue page, `{base}/page-{n}.html`
    pub fn page_url(&self, page: u32) -> Result<Url, ScrapeError> {
        // Url::join drops the last path segment unless the base ends in '/'
        let mut base = self.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let url = Url::parse(&base)?.join(&format!("page-{}.html", page))?;
        Ok(url)
    }
}
