//! Streams the records of a whole content subtree.
//!
//! [`resolve_root`] turns a requested path into the node to start from and
//! [`Crawler`] walks everything below it, writing one JSON object per line
//! to any [`std::io::Write`] sink.
//!
//! ```
//! use refscan_crawl::{Crawler, DEFAULT_ROOT, resolve_root};
//! use refscan_extract::ExtractOptions;
//! use refscan_repository::{MemoryRepository, Properties};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let repository = MemoryRepository::default()
//!     .with_nodes([("/content/site/logo", Properties::from_iter([("fileReference", "/content/dam/logo.svg")]))]);
//! let root = resolve_root(&repository, None, DEFAULT_ROOT)?;
//! let options = ExtractOptions::default();
//! let mut crawler = Crawler::new(&repository, &options, Vec::new());
//! let stats = crawler.traverse(&root)?;
//! assert_eq!(stats.assets, 1);
//! assert_eq!(
//!     String::from_utf8(crawler.into_sink())?,
//!     "{\"path\":\"/content/site/logo\",\"fileReference\":\"/content/dam/logo.svg\"}\n",
//! );
//! # Ok(())
//! # }
//! ```

pub mod error;
mod root;
mod traverse;

pub use crate::root::{DEFAULT_ROOT, resolve_root};
pub use crate::traverse::{Crawler, Stats};
