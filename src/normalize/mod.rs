//! Field normalization and dataset assembly
//!
//! This module converts raw, text-valued records into typed clean records
//! and assembles the admitted rows into the final dataset, preserving crawl
//! order. A row is admitted only if both its price and its rating coerced to
//! a value; stock always coerces (defaulting to 0), so it never drops a row.

mod coerce;

pub use coerce::{coerce_price, coerce_rating, coerce_stock, Coerced, PriceInput};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::scrape::RawRecord;

/// One product record with typed, validated fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanRecord {
    /// Product title, carried through from the raw record unmodified
    #[serde(rename = "Title")]
    pub title: String,

    /// Price as a non-negative float
    #[serde(rename = "Price")]
    pub price: f64,

    /// Star rating, always one of 1..=5
    #[serde(rename = "Rating")]
    pub rating: u8,

    /// Units in stock; 0 when the page tracked no count
    #[serde(rename = "Stock")]
    pub stock: u32,
}

/// Counts of what happened to the rows during one normalization pass
///
/// Row-level failures are silent in the output table, so these counters are
/// the only place they surface besides debug logging.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeReport {
    /// Raw records seen
    pub input: usize,

    /// Clean records admitted to the dataset
    pub kept: usize,

    /// Rows dropped because the price did not coerce
    pub missing_price: usize,

    /// Rows dropped because the rating did not coerce
    pub missing_rating: usize,

    /// Admitted rows whose stock was defaulted to 0
    pub defaulted_stock: usize,
}

/// Normalize one raw record; `None` when price or rating is missing.
pub fn normalize_record(raw: &RawRecord) -> Option<CleanRecord> {
    let price = coerce_price(&PriceInput::Text(raw.price_text.clone())).value()?;
    let rating = coerce_rating(&raw.rating_text).value()?;
    let stock = coerce_stock(&raw.availability_text).value().unwrap_or(0);

    Some(CleanRecord {
        title: raw.title.clone(),
        price,
        rating,
        stock,
    })
}

/// Normalize a raw dataset into the clean table, in input order.
///
/// Returns the admitted records together with a report of dropped and
/// defaulted rows.
pub fn normalize_records(records: &[RawRecord]) -> (Vec<CleanRecord>, NormalizeReport) {
    let mut clean = Vec::with_capacity(records.len());
    let mut report = NormalizeReport {
        input: records.len(),
        ..NormalizeReport::default()
    };

    for raw in records {
        let price = coerce_price(&PriceInput::Text(raw.price_text.clone()));
        let rating = coerce_rating(&raw.rating_text);

        if price.is_missing() {
            report.missing_price += 1;
        }
        if rating.is_missing() {
            report.missing_rating += 1;
        }

        let (Some(price), Some(rating)) = (price.value(), rating.value()) else {
            debug!("dropping record '{}': price or rating missing", raw.title);
            continue;
        };

        let stock = match coerce_stock(&raw.availability_text) {
            Coerced::Value(count) => count,
            _ => {
                report.defaulted_stock += 1;
                0
            }
        };

        clean.push(CleanRecord {
            title: raw.title.clone(),
            price,
            rating,
            stock,
        });
        report.kept += 1;
    }

    (clean, report)
}
