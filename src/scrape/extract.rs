//! Record extraction for one catalogue page
//!
//! Parses a page's HTML and returns one `RawRecord` per product block. The
//! extraction is a pure parse: text fields are carried verbatim and all
//! numeric interpretation is deferred to the normalizer.

use scraper::{ElementRef, Html, Selector};
use tracing::warn;

use crate::scrape::error::ScrapeError;
use crate::scrape::RawRecord;

/// Extracts raw product records from catalogue page HTML.
pub struct RecordExtractor {
    block: Selector,
    title_link: Selector,
    price: Selector,
    rating: Selector,
    availability: Selector,
}

impl RecordExtractor {
    /// Create an extractor for the catalogue's product markup.
    pub fn new() -> Result<Self, ScrapeError> {
        Ok(Self {
            block: parse_selector("article.product_pod")?,
            title_link: parse_selector("h3 a")?,
            price: parse_selector("p.price_color")?,
            rating: parse_selector("p.star-rating")?,
            availability: parse_selector("p.availability")?,
        })
    }

    /// Extract all product records from one page, in source order.
    ///
    /// A page with no matching product blocks yields an empty vector; that is
    /// not an error. A block without the required title attribute is skipped
    /// with a warning and the rest of the page is still processed.
    pub fn extract(&self, html: &str) -> Vec<RawRecord> {
        let document = Html::parse_document(html);

        let mut records = Vec::new();
        for block in document.select(&self.block) {
            match self.extract_block(&block) {
                Some(record) => records.push(record),
                None => warn!("skipping product block without a title attribute"),
            }
        }
        records
    }

    /// Extract one product block; `None` if the required title is absent.
    fn extract_block(&self, block: &ElementRef) -> Option<RawRecord> {
        let title = block
            .select(&self.title_link)
            .next()?
            .value()
            .attr("title")?
            .to_string();

        let price_text = block
            .select(&self.price)
            .next()
            .map(|e| collapse_whitespace(e.text()))
            .unwrap_or_default();

        // The star rating is encoded as the class token next to "star-rating",
        // e.g. <p class="star-rating Three">. The token is carried verbatim;
        // whether an unrecognized token counts as a rating is the normalizer's
        // decision, not ours.
        let rating_text = block
            .select(&self.rating)
            .next()
            .and_then(|e| {
                e.value()
                    .classes()
                    .find(|class| *class != "star-rating")
                    .map(str::to_string)
            })
            .unwrap_or_default();

        let availability_text = block
            .select(&self.availability)
            .next()
            .map(|e| collapse_whitespace(e.text()))
            .unwrap_or_default();

        Some(RawRecord {
            title,
            price_text,
            rating_text,
            availability_text,
        })
    }
}

fn parse_selector(selector: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector)
        .map_err(|e| ScrapeError::Selector(format!("failed to parse '{}': {}", selector, e)))
}

/// Join an element's text nodes, trimming and collapsing inner whitespace.
///
/// The stock-status element spreads its text over several indented lines;
/// this reduces it to e.g. "In stock (22 available)".
fn collapse_whitespace<'a>(text_iter: impl Iterator<Item = &'a str>) -> String {
    let mut buffer = String::new();
    for part in text_iter {
        for word in part.split_whitespace() {
            if !buffer.is_empty() {
                buffer.push(' ');
            }
            buffer.push_str(word);
        }
    }
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product_block(title: &str, price: &str, rating: &str, availability: &str) -> String {
        format!(
            r#"<article class="product_pod">
                <h3><a href="book.html" title="{title}">{title} truncated...</a></h3>
                <p class="star-rating {rating}"><i class="icon-star"></i></p>
                <div class="product_price">
                    <p class="price_color">{price}</p>
                    <p class="instock availability">
                        <i class="icon-ok"></i>
                        {availability}
                    </p>
                </div>
            </article>"#
        )
    }

    fn page(blocks: &[String]) -> String {
        format!("<html><body><section>{}</section></body></html>", blocks.join("\n"))
    }

    #[test]
    fn test_extracts_one_record_per_block_in_order() {
        let html = page(&[
            product_block("Book A", "£10.00", "Two", "In stock (5 available)"),
            product_block("Book B", "£51.77", "Three", "In stock (22 available)"),
            product_block("Book C", "£13.99", "Five", "In stock"),
        ]);

        let extractor = RecordExtractor::new().unwrap();
        let records = extractor.extract(&html);

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].title, "Book A");
        assert_eq!(records[1].title, "Book B");
        assert_eq!(records[2].title, "Book C");
        assert_eq!(records[1].price_text, "£51.77");
        assert_eq!(records[1].rating_text, "Three");
        assert_eq!(records[1].availability_text, "In stock (22 available)");
    }

    #[test]
    fn test_no_blocks_is_empty_not_error() {
        let extractor = RecordExtractor::new().unwrap();
        assert!(extractor.extract("<html><body><p>no products here</p></body></html>").is_empty());
    }

    #[test]
    fn test_block_without_title_attribute_is_skipped() {
        let mut broken = product_block("X", "£5.00", "One", "In stock");
        broken = broken.replace(r#"title="X""#, "");
        let html = page(&[
            product_block("Book A", "£10.00", "Two", "In stock"),
            broken,
            product_block("Book C", "£13.99", "Four", "In stock"),
        ]);

        let extractor = RecordExtractor::new().unwrap();
        let records = extractor.extract(&html);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Book A");
        assert_eq!(records[1].title, "Book C");
    }

    #[test]
    fn test_missing_sub_elements_yield_empty_fields() {
        let html = page(&[r#"<article class="product_pod">
            <h3><a href="book.html" title="Bare Book">Bare Book</a></h3>
        </article>"#
            .to_string()]);

        let extractor = RecordExtractor::new().unwrap();
        let records = extractor.extract(&html);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Bare Book");
        assert_eq!(records[0].price_text, "");
        assert_eq!(records[0].rating_text, "");
        assert_eq!(records[0].availability_text, "");
    }

    #[test]
    fn test_rating_token_absent_when_only_base_class() {
        let html = page(&[product_block("Book A", "£10.00", "", "In stock")]);

        let extractor = RecordExtractor::new().unwrap();
        let records = extractor.extract(&html);

        assert_eq!(records[0].rating_text, "");
    }

    #[test]
    fn test_unrecognized_rating_token_is_carried_verbatim() {
        let html = page(&[product_block("Book A", "£10.00", "Zero", "In stock")]);

        let extractor = RecordExtractor::new().unwrap();
        let records = extractor.extract(&html);

        assert_eq!(records[0].rating_text, "Zero");
    }

    #[test]
    fn test_availability_whitespace_is_collapsed() {
        let html = page(&[product_block(
            "Book A",
            "£10.00",
            "One",
            "In stock\n\n                (19 available)",
        )]);

        let extractor = RecordExtractor::new().unwrap();
        let records = extractor.extract(&html);

        assert_eq!(records[0].availability_text, "In stock (19 available)");
    }
}
