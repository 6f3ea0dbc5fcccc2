//! Crawl driver: iterate the configured page range and collect raw records

use tracing::{debug, info, instrument, warn};

use crate::scrape::config::ScrapeConfig;
use crate::scrape::error::ScrapeError;
use crate::scrape::extract::RecordExtractor;
use crate::scrape::fetch::PageFetcher;
use crate::scrape::RawRecord;

/// Crawl the catalogue pages `[first_page, last_page]` in ascending order and
/// return the concatenated raw records in crawl order.
///
/// A page that fails to fetch contributes nothing and the crawl continues
/// with the next page number, so one transient failure does not discard the
/// rest of the run. Pages are fetched one at a time; result ordering is part
/// of the output contract.
#[instrument(skip(fetcher))]
pub async fn crawl_catalogue<F: PageFetcher>(
    fetcher: &F,
    config: &ScrapeConfig,
) -> Result<Vec<RawRecord>, ScrapeError> {
    let extractor = RecordExtractor::new()?;
    let mut records = Vec::new();

    info!(
        "crawling pages {} through {} of {}",
        config.first_page, config.last_page, config.base_url
    );

    for page in config.first_page..=config.last_page {
        let url = config.page_url(page)?;

        let html = match fetcher.fetch_page(&url).await {
            Ok(html) => html,
            Err(e) => {
                warn!("skipping page {}: {}", page, e);
                continue;
            }
        };

        let page_records = extractor.extract(&html);
        debug!("page {}: {} records", page, page_records.len());
        records.extend(page_records);
    }

    info!("crawl finished with {} raw records", records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use url::Url;

    /// In-memory fetcher serving canned pages; absent URLs fail like a 404.
    struct StubFetcher {
        pages: HashMap<String, String>,
    }

    impl StubFetcher {
        fn new(pages: &[(&str, &str)]) -> Self {
            Self {
                pages: pages
                    .iter()
                    .map(|(path, html)| (path.to_string(), html.to_string()))
                    .collect(),
            }
        }
    }

    impl PageFetcher for StubFetcher {
        async fn fetch_page(&self, url: &Url) -> Result<String, ScrapeError> {
            self.pages.get(url.path()).cloned().ok_or(ScrapeError::Status {
                url: url.to_string(),
                status: 404,
            })
        }
    }

    fn page_with_titles(titles: &[&str]) -> String {
        let blocks: Vec<String> = titles
            .iter()
            .map(|t| {
                format!(
                    r#"<article class="product_pod">
                        <h3><a href="b.html" title="{t}">{t}</a></h3>
                        <p class="star-rating Three"></p>
                        <p class="price_color">£10.00</p>
                        <p class="instock availability">In stock (1 available)</p>
                    </article>"#
                )
            })
            .collect();
        format!("<html><body>{}</body></html>", blocks.join(""))
    }

    fn test_config(last_page: u32) -> ScrapeConfig {
        ScrapeConfig::builder()
            .base_url("http://example.com/catalogue")
            .page_range(1, last_page)
            .build()
    }

    #[tokio::test]
    async fn test_crawl_concatenates_pages_in_order() {
        let (p1, p2, p3) = (
            page_with_titles(&["A1", "A2"]),
            page_with_titles(&["B1"]),
            page_with_titles(&["C1", "C2"]),
        );
        let fetcher = StubFetcher::new(&[
            ("/catalogue/page-1.html", p1.as_str()),
            ("/catalogue/page-2.html", p2.as_str()),
            ("/catalogue/page-3.html", p3.as_str()),
        ]);

        let records = crawl_catalogue(&fetcher, &test_config(3)).await.unwrap();
        let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["A1", "A2", "B1", "C1", "C2"]);
    }

    #[tokio::test]
    async fn test_failed_page_is_skipped_and_order_preserved() {
        // Page 2 is missing; pages 1 and 3 must survive in that relative order
        let (p1, p3) = (page_with_titles(&["A1"]), page_with_titles(&["C1"]));
        let fetcher = StubFetcher::new(&[
            ("/catalogue/page-1.html", p1.as_str()),
            ("/catalogue/page-3.html", p3.as_str()),
        ]);

        let records = crawl_catalogue(&fetcher, &test_config(3)).await.unwrap();
        let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["A1", "C1"]);
    }

    #[tokio::test]
    async fn test_all_pages_failing_yields_empty_dataset() {
        let fetcher = StubFetcher::new(&[]);
        let records = crawl_catalogue(&fetcher, &test_config(3)).await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_page_without_blocks_contributes_nothing() {
        let p1 = page_with_titles(&["A1"]);
        let fetcher = StubFetcher::new(&[
            ("/catalogue/page-1.html", p1.as_str()),
            ("/catalogue/page-2.html", "<html><body>maintenance</body></html>"),
        ]);

        let records = crawl_catalogue(&fetcher, &test_config(2)).await.unwrap();
        assert_eq!(records.len(), 1);
    }
}
