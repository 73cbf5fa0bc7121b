//! Repository Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};
use std::io::Error as IoError;

/// A repository error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for repository operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// Node does not exist
    #[display("node not found: {_0}")]
    NotFound(#[error(not(source))] String),
    /// Path is relative, contains invalid characters, or escapes the root
    #[display("invalid path: {_0:?}")]
    InvalidPath(#[error(not(source))] String),
    /// Node exists but could not be read (access control, corrupt storage)
    #[display("unreadable node: {_0}")]
    Unreadable(#[error(not(source))] String),
    /// Content export could not be interpreted as a content tree
    #[display("invalid content export: {_0}")]
    InvalidExport(#[error(not(source))] String),
    /// Underlying I/O error
    #[display("I/O error: {_0}")]
    Io(IoError),
}
impl From<IoError> for ErrorKind {
    fn from(err: IoError) -> Self {
        Self::Io(err)
    }
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Unreadable(_))
    }
}
