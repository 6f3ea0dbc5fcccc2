//! CSV persistence for the raw and clean tables
//!
//! The raw table is a legitimate artifact in its own right: it is the
//! handoff between the crawl and the normalization stage, so the two can run
//! independently (re-normalize without re-crawling). Reads validate the
//! header schema and fail hard on a missing column, since that signals a
//! structural contract violation rather than a per-row data-quality issue.

use std::path::Path;

use csv::StringRecord;
use thiserror::Error;
use tracing::warn;

use crate::error::Error as CrateError;
use crate::normalize::CleanRecord;
use crate::scrape::RawRecord;

/// Column order of the raw table
pub const RAW_COLUMNS: [&str; 4] = ["Title", "Price", "Rating", "Availability"];

/// Column order of the clean table
pub const CLEAN_COLUMNS: [&str; 4] = ["Title", "Price", "Rating", "Stock"];

/// Error type for dataset I/O
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Filesystem error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read/write error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the file's header
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
}

impl From<DatasetError> for CrateError {
    fn from(err: DatasetError) -> Self {
        match err {
            DatasetError::Io(e) => CrateError::Io(e),
            DatasetError::Csv(e) => CrateError::Csv(e),
            _ => CrateError::Dataset(err.to_string()),
        }
    }
}

/// Find a required column, tolerating padding and casing drift in the header.
fn column_index(headers: &StringRecord, name: &'static str) -> Result<usize, DatasetError> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
        .ok_or(DatasetError::MissingColumn(name))
}

fn field(row: &StringRecord, index: usize) -> String {
    row.get(index).unwrap_or_default().to_string()
}

/// Write the raw table with columns `Title, Price, Rating, Availability`.
pub fn write_raw_csv(path: &Path, records: &[RawRecord]) -> Result<(), DatasetError> {
    // Disable the serializer's automatic header so the only header is the
    // explicit one written below (otherwise `serialize` emits a second,
    // duplicate header row from the struct's field names).
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    // Write the header up front so an empty crawl still leaves a valid table
    writer.write_record(RAW_COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Read a raw table, validating that every required column is present.
pub fn read_raw_csv(path: &Path) -> Result<Vec<RawRecord>, DatasetError> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    let title = column_index(&headers, RAW_COLUMNS[0])?;
    let price = column_index(&headers, RAW_COLUMNS[1])?;
    let rating = column_index(&headers, RAW_COLUMNS[2])?;
    let availability = column_index(&headers, RAW_COLUMNS[3])?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        records.push(RawRecord {
            title: field(&row, title),
            price_text: field(&row, price),
            rating_text: field(&row, rating),
            availability_text: field(&row, availability),
        });
    }
    Ok(records)
}

/// Write the clean table with columns `Title, Price, Rating, Stock`.
pub fn write_clean_csv(path: &Path, records: &[CleanRecord]) -> Result<(), DatasetError> {
    // Disable the serializer's automatic header so the only header is the
    // explicit one written below (see `write_raw_csv` for the rationale).
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(CLEAN_COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Read a clean table, validating that every required column is present.
///
/// A row whose numeric fields fail to parse is skipped with a warning; a
/// missing column aborts the read.
pub fn read_clean_csv(path: &Path) -> Result<Vec<CleanRecord>, DatasetError> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    let title = column_index(&headers, CLEAN_COLUMNS[0])?;
    let price = column_index(&headers, CLEAN_COLUMNS[1])?;
    let rating = column_index(&headers, CLEAN_COLUMNS[2])?;
    let stock = column_index(&headers, CLEAN_COLUMNS[3])?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let parsed = (
            field(&row, price).trim().parse::<f64>(),
            field(&row, rating).trim().parse::<u8>(),
            field(&row, stock).trim().parse::<u32>(),
        );

        match parsed {
            (Ok(price), Ok(rating), Ok(stock)) => records.push(CleanRecord {
                title: field(&row, title),
                price,
                rating,
                stock,
            }),
            _ => warn!("skipping unparseable clean row '{}'", field(&row, title)),
        }
    }
    Ok(records)
}
