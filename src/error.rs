// src/error.rs

use thiserror::Error;

/// Failures of the table contract or of column resolution.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("no header matches '{header}' (headers: {available:?})")]
    HeaderNotFound { header: String, available: Vec<String> },
    #[error("page {page} renders columns {found:?}, expected {expected:?}")]
    ColumnsChanged { page: usize, expected: Vec<String>, found: Vec<String> },
    #[error("table surface failure: {0}")]
    Surface(String),
}

/// Failures of the token date grammar and the lenient host parser.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("format '{format}' has {tokens} token(s) but '{input}' has {values} value(s)")]
    FormatMismatch { input: String, format: String, tokens: usize, values: usize },
    #[error("'{value}' is not a valid {token} value")]
    InvalidField { token: &'static str, value: String },
    #[error("unknown month name '{0}'")]
    UnknownMonth(String),
    #[error("'{0}' does not name a real calendar instant")]
    OutOfRange(String),
    #[error("unrecognised date '{0}'")]
    Unparsable(String),
}

/// Abnormal end of a pagination sweep. Normal exhaustion is not an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaginationError {
    #[error("pagination safety cap of {cap} pages exceeded (last label '{last_label}', {rows} row(s) collected)")]
    SafetyCapExceeded { cap: usize, last_label: String, rows: usize },
    #[error(transparent)]
    Table(#[from] TableError),
}

/// Reading captured inputs from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{path}: {source}")]
    Io { path: String, #[source] source: std::io::Error },
    #[error("{path}: invalid JSON envelope: {source}")]
    Json { path: String, #[source] source: serde_json::Error },
}
