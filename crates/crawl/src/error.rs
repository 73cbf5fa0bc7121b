//! Crawl Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A crawl error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for crawl operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Classifies why a crawl could not start or had to stop.
///
/// ### Root Resolution
/// - [`ErrorKind::NotFound`]
/// - [`ErrorKind::InvalidPath`]
///
/// ### Per-Node Failures
/// Always raised underneath [`ErrorKind::Traversal`], which carries the path
/// of the node being processed.
/// - [`ErrorKind::Repository`]
/// - [`ErrorKind::Extract`]
/// - [`ErrorKind::Serialize`]
/// - [`ErrorKind::Write`]
#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// The requested root does not resolve to an existing node.
    #[display("root not found: {_0}")]
    NotFound(#[error(not(source))] String),
    /// The requested root is not a valid repository path.
    #[display("invalid root path: {_0:?}")]
    InvalidPath(#[error(not(source))] String),
    /// The repository failed to resolve or list a node.
    #[display("repository failure")]
    Repository,
    /// Records could not be derived from a node.
    #[display("record extraction failed")]
    Extract,
    /// A record could not be encoded.
    #[display("record serialization failed")]
    Serialize,
    /// The output sink rejected a write; also how a disconnected consumer
    /// shows up.
    #[display("output sink failed")]
    Write,
    /// The traversal was aborted while processing the node at this path
    /// (empty when the node itself couldn't be read).
    #[display("traversal aborted at {_0:?}")]
    Traversal(#[error(not(source))] String),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    ///
    /// Extraction is read-only, so retrying means running the whole crawl
    /// again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Repository | Self::Traversal(_))
    }
}
