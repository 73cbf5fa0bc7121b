//! Turns repository nodes into output records.
//!
//! Every node can yield two kinds of [`Record`]:
//!
//! - An [`AssetReference`](models::AssetReference) for each property value
//!   pointing into the asset library (see [`asset_values`]).
//! - One [`ComponentReference`](models::ComponentReference) when the node
//!   names a resource type.
//!
//! Both carry the metadata of the enclosing page when there is one. Nothing
//! here performs I/O besides the repository lookups made by [`Extractor`].

mod consts;
pub mod error;
mod extract;
mod format;
pub mod models;
mod options;

pub use crate::consts::DEFAULT_ASSET_PREFIX;
pub use crate::extract::{Extractor, asset_values};
pub use crate::format::format_timestamp;
pub use crate::models::Record;
pub use crate::options::{ExtractOptions, SequenceReferences, SuperTypeFallback};
