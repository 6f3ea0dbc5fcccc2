//! Page fetching for the scrape module
//!
//! The fetcher is the pipeline's only I/O boundary: given a page URL it
//! returns the raw HTML or fails. It is a trait so the crawl driver can be
//! exercised against in-memory pages in tests.

use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::scrape::config::ScrapeConfig;
use crate::scrape::error::ScrapeError;

/// A source of raw page content.
pub trait PageFetcher {
    /// Fetch one page and return its raw HTML.
    fn fetch_page(
        &self,
        url: &Url,
    ) -> impl Future<Output = Result<String, ScrapeError>> + Send;
}

/// Production fetcher backed by a reqwest client.
///
/// The client is built once with the configured user agent and an explicit
/// request timeout, then reused across all page requests.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher from the scrape configuration.
    pub fn new(config: &ScrapeConfig) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()?;
        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch_page(&self, url: &Url) -> Result<String, ScrapeError> {
        debug!("GET {}", url);
        let response = self.client.get(url.clone()).send().await?;

        if !response.status().is_success() {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
