//! Polars-backed reading for large sources.
//!
//! The per-athlete event file runs to hundreds of thousands of rows; above
//! a size threshold it is read through Polars instead of the plain `csv`
//! reader, then converted to the common [`CsvTable`] shape so loaders stay
//! agnostic of the reader.

use std::path::Path;

use polars::prelude::{AnyValue, CsvReadOptions, DataFrame, SerReader};

use crate::csv_table::{CsvTable, read_csv_table};
use crate::error::{IngestError, Result};

/// File size (in bytes) above which Polars is used. Default: 10 MB.
pub const DEFAULT_STREAMING_THRESHOLD_BYTES: u64 = 10 * 1024 * 1024;

/// Check if a file should use the Polars reader based on its size.
pub fn should_use_streaming(path: impl AsRef<Path>) -> bool {
    should_use_streaming_with_threshold(path, DEFAULT_STREAMING_THRESHOLD_BYTES)
}

pub fn should_use_streaming_with_threshold(path: impl AsRef<Path>, threshold_bytes: u64) -> bool {
    std::fs::metadata(path.as_ref())
        .map(|m| m.len() >= threshold_bytes)
        .unwrap_or(false)
}

/// Read a CSV file, automatically selecting the reader by file size.
pub fn read_csv_table_auto(path: &Path) -> Result<CsvTable> {
    if should_use_streaming(path) {
        tracing::debug!(path = %path.display(), "using polars reader for large file");
        let df = read_dataframe(path)?;
        dataframe_to_csv_table(&df, path)
    } else {
        read_csv_table(path)
    }
}

fn read_dataframe(path: &Path) -> Result<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::PolarsRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::PolarsRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

fn dataframe_to_csv_table(df: &DataFrame, path: &Path) -> Result<CsvTable> {
    let headers: Vec<String> = df
        .get_column_names()
        .into_iter()
        .map(|s| s.to_string())
        .collect();

    let mut rows = Vec::with_capacity(df.height());
    for row_idx in 0..df.height() {
        let mut row = Vec::with_capacity(headers.len());
        for col in df.get_columns() {
            let value = col.get(row_idx).map_err(|e| IngestError::PolarsRead {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
            row.push(any_to_string(value));
        }
        rows.push(row);
    }

    Ok(CsvTable { headers, rows })
}

/// Converts a Polars AnyValue to its string cell representation.
/// Null becomes the empty string; integral floats lose their ".0" suffix.
fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.trim().to_string(),
        AnyValue::StringOwned(s) => s.trim().to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        other => other.to_string(),
    }
}

fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
