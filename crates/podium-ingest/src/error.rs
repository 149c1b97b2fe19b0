use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("data directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("dataset file not found in {dir}: {filename}")]
    DatasetNotFound { dir: PathBuf, filename: String },

    #[error("failed to read csv {path}: {source}")]
    CsvRead {
        path: PathBuf,
        source: Box<csv::Error>,
    },

    #[error("failed to read csv {path}: {message}")]
    PolarsRead { path: PathBuf, message: String },

    /// No schema adapter matched the file's headers.
    #[error("{dataset}: no known column scheme matched (tried {tried:?}; missing {missing:?})")]
    SchemaMismatch {
        dataset: String,
        tried: Vec<String>,
        missing: Vec<String>,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
