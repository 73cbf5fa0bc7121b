//! Extraction Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// An extraction error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// Missing metadata (no page, no component, no replication data) is never an
/// error; only failures of the repository itself or of rendering a value are.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A repository lookup failed while resolving metadata for a node.
    #[display("repository lookup failed for {_0}")]
    Repository(#[error(not(source))] String),
    /// A value could not be rendered for output.
    #[display("failed to format field '{field}', found value: {value}")]
    Format {
        /// The field that failed to format.
        field: &'static str,
        /// The value that could not be formatted.
        value: String,
    },
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Repository(_))
    }
}
