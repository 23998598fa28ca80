//! Errors surfaced by the I/O and rendering layers.
//!
//! The reclassification pipeline itself never fails; everything here comes from reading
//! files, parsing token CSV, loading configuration or picking an output format.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HighlightError {
    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed token CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("record {record}: unknown token category '{label}'")]
    UnknownCategory { record: usize, label: String },

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Format(#[from] crate::highlight::formats::FormatError),
}

pub type Result<T> = std::result::Result<T, HighlightError>;
