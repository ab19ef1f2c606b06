use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors of the quote pipeline. Any of these aborts the run before
/// output files are written.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV input: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unexpected header: expected {expected} columns, found {found}")]
    HeaderMismatch { expected: usize, found: usize },

    #[error("Invalid {field} value {value:?} on line {line}")]
    InvalidNumber {
        line: u64,
        field: &'static str,
        value: String,
    },

    #[error("No valid quotes in {path} after cleaning")]
    EmptyTable { path: PathBuf },

    #[error("Invalid simulation parameters: mean {mean}, std {std}")]
    InvalidSimulation { mean: f64, std: f64 },

    #[error("Failed to serialize result document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
