//! Error types for trade loading and per-record encoding

use thiserror::Error;

/// Failure to obtain a trade dataset at all
#[derive(Error, Debug)]
pub enum DataError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid trade JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single record that cannot be turned into a sphere.
///
/// These never abort a build; the record is skipped and counted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordDefect {
    #[error("delta {0:?} is not a number")]
    InvalidDelta(String),

    #[error("volume {0:?} is not a finite number")]
    InvalidVolume(String),

    #[error("created_time {0:?} is not a recognised timestamp")]
    InvalidTimestamp(String),
}
