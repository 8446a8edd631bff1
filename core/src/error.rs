//! Error types for dataset loading and dashboard configuration.
//!
//! Everything here is a startup-time failure. Per-update reconciliation
//! never errors: stale selections are discarded and unknown categories
//! simply match no rows.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset is missing required column '{0}'")]
    MissingColumn(String),

    #[error("dataset contains no usable rows")]
    EmptyDataset,

    #[error("chart '{chart}' is bound to unknown column '{column}'")]
    UnknownColumn { chart: String, column: String },

    #[error("duplicate chart id '{0}' in dashboard config")]
    DuplicateChart(String),

    #[error("failed to parse config {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
