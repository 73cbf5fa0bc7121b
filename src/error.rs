//! Application Error Types
//!
//! Wraps the library crates' errors with what the command was doing when
//! they happened.

use derive_more::{Display, Error};
use std::path::PathBuf;

/// An application error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for application operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    #[display("failed to load configuration")]
    Config,
    #[display("failed to open the content repository")]
    Repository,
    #[display("content extraction failed")]
    Crawl,
    #[display("failed to open output file {}", _0.display())]
    Output(#[error(not(source))] PathBuf),
    #[display("failed to print configuration")]
    Print,
    #[display("HTTP server failed")]
    Server,
}
