//! Error types for order ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading an order file.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the in-memory batch limit.
    #[error("input file {path} is {size} bytes, limit is {max_size} bytes")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    // === Malformed Input Errors ===
    /// The delimited reader rejected the input.
    #[error("malformed delimited input: {0}")]
    Csv(#[from] csv::Error),

    /// The header names the same column more than once.
    #[error("duplicate column '{column}' in header")]
    DuplicateColumn { column: String },

    /// A data row has more cells than the header.
    #[error("line {line}: expected at most {expected} fields, found {found}")]
    MalformedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// A birthday cell could not be parsed as a date.
    #[error("line {line}: cannot parse {column} value '{value}' as a date")]
    InvalidDate {
        line: u64,
        column: String,
        value: String,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
