//! Descriptive statistics over the clean dataset
//!
//! A direct reduction over the clean table: per-column summaries in the
//! shape of a describe() table, plus top-N listings for reporting. Nothing
//! here feeds back into the pipeline; the dataset is read-only input.

use serde::Serialize;

use crate::normalize::CleanRecord;

/// Summary of one numeric column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    /// Number of values
    pub count: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Sample standard deviation; 0 when fewer than two values
    pub std: f64,
    /// Smallest value
    pub min: f64,
    /// 25th percentile
    pub q1: f64,
    /// Median
    pub median: f64,
    /// 75th percentile
    pub q3: f64,
    /// Largest value
    pub max: f64,
}

/// Per-column summaries of the clean table's numeric columns
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    /// Price column summary
    pub price: ColumnSummary,
    /// Rating column summary
    pub rating: ColumnSummary,
    /// Stock column summary
    pub stock: ColumnSummary,
}

/// Summarize one column of values; `None` for an empty column.
pub fn summarize(values: &[f64]) -> Option<ColumnSummary> {
    if values.is_empty() {
        return None;
    }

    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;

    let std = if count > 1 {
        let variance =
            values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
        variance.sqrt()
    } else {
        0.0
    };

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    Some(ColumnSummary {
        count,
        mean,
        std,
        min: sorted[0],
        q1: quantile(&sorted, 0.25),
        median: quantile(&sorted, 0.5),
        q3: quantile(&sorted, 0.75),
        max: sorted[count - 1],
    })
}

/// Summarize the numeric columns of the clean table; `None` when empty.
pub fn describe(records: &[CleanRecord]) -> Option<DatasetSummary> {
    let prices: Vec<f64> = records.iter().map(|r| r.price).collect();
    let ratings: Vec<f64> = records.iter().map(|r| f64::from(r.rating)).collect();
    let stocks: Vec<f64> = records.iter().map(|r| f64::from(r.stock)).collect();

    Some(DatasetSummary {
        price: summarize(&prices)?,
        rating: summarize(&ratings)?,
        stock: summarize(&stocks)?,
    })
}

/// The `n` records with the highest price, ties broken by input order.
pub fn top_by_price(records: &[CleanRecord], n: usize) -> Vec<&CleanRecord> {
    let mut ranked: Vec<&CleanRecord> = records.iter().collect();
    ranked.sort_by(|a, b| b.price.partial_cmp(&a.price).unwrap_or(std::cmp::Ordering::Equal));
    ranked.truncate(n);
    ranked
}

/// The `n` records with the highest stock, ties broken by input order.
pub fn top_by_stock(records: &[CleanRecord], n: usize) -> Vec<&CleanRecord> {
    let mut ranked: Vec<&CleanRecord> = records.iter().collect();
    ranked.sort_by(|a, b| b.stock.cmp(&a.stock));
    ranked.truncate(n);
    ranked
}

/// Shorten a title for display, marking the cut with an ellipsis.
///
/// Display-only: callers keep the stored title untouched. Counts characters,
/// not bytes, so multi-byte titles cut cleanly.
pub fn shorten_title(title: &str, max_chars: usize) -> String {
    if title.chars().count() <= max_chars {
        return title.to_string();
    }
    let kept: String = title.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept)
}

/// Quantile by linear interpolation over a sorted slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let low = position.floor() as usize;
    let high = position.ceil() as usize;
    let fraction = position - low as f64;
    sorted[low] + (sorted[high] - sorted[low]) * fraction
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(title: &str, price: f64, rating: u8, stock: u32) -> CleanRecord {
        CleanRecord {
            title: title.to_string(),
            price,
            rating,
            stock,
        }
    }

    #[test]
    fn test_summarize_basic_moments() {
        let summary = summarize(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(summary.count, 4);
        assert_eq!(summary.mean, 2.5);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 4.0);
        assert_eq!(summary.median, 2.5);
        assert_eq!(summary.q1, 1.75);
        assert_eq!(summary.q3, 3.25);
        // Sample standard deviation of 1..4
        assert!((summary.std - 1.2909944487358056).abs() < 1e-12);
    }

    #[test]
    fn test_summarize_single_value() {
        let summary = summarize(&[7.0]).unwrap();
        assert_eq!(summary.count, 1);
        assert_eq!(summary.std, 0.0);
        assert_eq!(summary.median, 7.0);
    }

    #[test]
    fn test_summarize_empty_is_none() {
        assert!(summarize(&[]).is_none());
        assert!(describe(&[]).is_none());
    }

    #[test]
    fn test_describe_covers_all_columns() {
        let records = vec![clean("A", 10.0, 2, 5), clean("B", 20.0, 4, 15)];
        let summary = describe(&records).unwrap();
        assert_eq!(summary.price.mean, 15.0);
        assert_eq!(summary.rating.mean, 3.0);
        assert_eq!(summary.stock.mean, 10.0);
    }

    #[test]
    fn test_top_by_price() {
        let records = vec![
            clean("cheap", 1.0, 1, 1),
            clean("dear", 30.0, 1, 1),
            clean("mid", 15.0, 1, 1),
        ];

        let top = top_by_price(&records, 2);
        let titles: Vec<&str> = top.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["dear", "mid"]);
    }

    #[test]
    fn test_top_by_stock_handles_short_input() {
        let records = vec![clean("only", 1.0, 1, 3)];
        assert_eq!(top_by_stock(&records, 10).len(), 1);
    }

    #[test]
    fn test_shorten_title() {
        assert_eq!(shorten_title("short", 40), "short");
        assert_eq!(shorten_title("abcdef", 4), "abc…");

        let shortened = shorten_title(&"ab".repeat(40), 10);
        assert_eq!(shortened.chars().count(), 10);
        assert!(shortened.ends_with('…'));
    }

    #[test]
    fn test_shorten_title_is_char_safe() {
        let title = "日本語のとても長いタイトルです";
        let shortened = shorten_title(title, 8);
        assert_eq!(shortened.chars().count(), 8);
        assert!(shortened.ends_with('…'));
    }
}
