//! Olympic dataset ingestion.
//!
//! Reads the four raw tabular sources into model types: plain `csv`
//! reading for the small files, a Polars-backed reader for the large
//! athlete-event file, ordered schema adapters for column-name fallback,
//! and per-load diagnostics.

pub mod csv_table;
pub mod discovery;
pub mod error;
pub mod loaders;
pub mod parse;
pub mod schema;
pub mod streaming;

pub use csv_table::{CsvTable, read_csv_table};
pub use discovery::{
    ATHLETE_EVENTS_FILE, COUNTRY_PROFILES_FILE, GAMES_SUMMARY_FILE, MEDAL_TALLY_FILE,
    find_dataset, list_csv_files,
};
pub use error::{IngestError, Result};
pub use loaders::{
    LoadReport, load_athlete_events, load_country_profiles, load_games_rows, load_medal_rows,
};
pub use parse::{extract_year, parse_i64, parse_u32};
pub use schema::{ColumnMap, SchemaAdapter, resolve_schema};
pub use streaming::{
    DEFAULT_STREAMING_THRESHOLD_BYTES, read_csv_table_auto, should_use_streaming,
    should_use_streaming_with_threshold,
};
