//! Field coercion rules
//!
//! Converts the scraped text fields into typed values. Each rule is total: it
//! always produces a `Coerced` outcome rather than an error, and the outcome
//! names which of the two silent policies applied when no value was found:
//! `Missing` (the row is dropped later) or `DefaultedZero` (the row keeps a
//! zero).

use std::sync::OnceLock;

use regex::Regex;

/// Outcome of coercing one raw field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coerced<T> {
    /// A usable value was parsed
    Value(T),

    /// No usable value was found; the field is zero by policy
    DefaultedZero,

    /// No usable value was found; the field is absent
    Missing,
}

impl<T> Coerced<T> {
    /// True when the field is absent
    pub fn is_missing(&self) -> bool {
        matches!(self, Coerced::Missing)
    }

    /// The parsed value, if one was found
    pub fn value(self) -> Option<T> {
        match self {
            Coerced::Value(v) => Some(v),
            _ => None,
        }
    }
}

/// Raw price input, as it may arrive either from a scrape (text with a
/// currency symbol) or from a prior cleaning pass (already numeric)
#[derive(Debug, Clone, PartialEq)]
pub enum PriceInput {
    /// Price already parsed by an earlier pass
    Number(f64),

    /// Price as scraped, e.g. "£51.77"
    Text(String),
}

fn digit_run() -> &'static Regex {
    static DIGIT_RUN: OnceLock<Regex> = OnceLock::new();
    DIGIT_RUN.get_or_init(|| Regex::new(r"\d+").expect("digit-run pattern is valid"))
}

/// Coerce a price to a non-negative float.
///
/// Text input keeps only digit, decimal point, and minus characters, which
/// drops currency symbols (£, $, €) and thousands separators, then parses the
/// remainder as a float. An empty or non-numeric remainder is `Missing`, as
/// is any value that would break the non-negative price invariant. Numeric
/// input goes through the same validation, so re-running the coercion over
/// already-clean data yields the same values.
pub fn coerce_price(input: &PriceInput) -> Coerced<f64> {
    let parsed = match input {
        PriceInput::Number(n) => Some(*n),
        PriceInput::Text(text) => {
            let scrubbed: String = text
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
                .collect();
            scrubbed.parse::<f64>().ok()
        }
    };

    match parsed {
        Some(price) if price.is_finite() && price >= 0.0 => Coerced::Value(price),
        _ => Coerced::Missing,
    }
}

/// Coerce a rating to an integer in 1..=5.
///
/// Numeric input is tried first so the coercion is idempotent across repeated
/// cleaning passes; a numeric value must be integral and in range. Otherwise
/// the case-insensitive word forms "one" through "five" are mapped. Anything
/// else, including "Zero" and out-of-range numbers, is `Missing`.
pub fn coerce_rating(text: &str) -> Coerced<u8> {
    let text = text.trim();
    if text.is_empty() {
        return Coerced::Missing;
    }

    if let Ok(n) = text.parse::<f64>() {
        if n.fract() == 0.0 && (1.0..=5.0).contains(&n) {
            return Coerced::Value(n as u8);
        }
        return Coerced::Missing;
    }

    match text.to_ascii_lowercase().as_str() {
        "one" => Coerced::Value(1),
        "two" => Coerced::Value(2),
        "three" => Coerced::Value(3),
        "four" => Coerced::Value(4),
        "five" => Coerced::Value(5),
        _ => Coerced::Missing,
    }
}

/// Coerce a stock count from the availability text.
///
/// The first run of decimal digits is the count, e.g. "In stock (22
/// available)" is 22. Text without a digit run means the count is not
/// separately tracked, which is `DefaultedZero` rather than `Missing`: the
/// row is kept with a stock of 0.
pub fn coerce_stock(text: &str) -> Coerced<u32> {
    match digit_run().find(text) {
        Some(m) => match m.as_str().parse::<u32>() {
            Ok(count) => Coerced::Value(count),
            // A run too long for u32 is garbage, not a count
            Err(_) => Coerced::DefaultedZero,
        },
        None => Coerced::DefaultedZero,
    }
}
