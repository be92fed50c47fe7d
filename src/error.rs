use std::path::PathBuf;
use thiserror::Error;

use crate::dataset::Gender;

/// The main error type for fldprep operations.
#[derive(Debug, Error)]
pub enum FldPrepError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data directory {path}: {message}")]
    DataDirInvalid { path: PathBuf, message: String },

    #[error("Failed to read split manifest {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse rectangle file {path}: {message}")]
    RectParse { path: PathBuf, message: String },

    #[error("Failed to parse points file {path} at line {line}: {message}")]
    PointsParse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error(
        "Not enough new {gender} images to fill the train split: need {required}, found {available}"
    )]
    InsufficientPool {
        gender: Gender,
        required: usize,
        available: usize,
    },

    #[error("Failed to serialize report: {0}")]
    ReportWrite(#[from] serde_json::Error),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}
