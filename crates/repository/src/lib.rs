//! Read-only access to a hierarchical content repository.
//!
//! The repository is an external system of record; this crate only describes
//! what the rest of refscan needs from it:
//!
//! - **Tree access** through the [`Repository`] trait (resolve by path, list
//!   children), handing out owned [`Node`] snapshots with their
//!   [`Properties`].
//! - **Content-model lookups** built on top of tree access: the enclosing
//!   [`Page`], the [`Component`] behind a resource type, and a page's
//!   [`ReplicationStatus`].
//!
//! [`MemoryRepository`] is the one implementation shipped here. It holds a
//! whole tree in memory and can be populated from a JSON content export.

pub mod backend;
pub mod consts;
pub mod error;
mod models;
mod path;
mod timestamp;

pub use crate::backend::{MemoryRepository, NodeIter, Repository};
pub use crate::models::{
    Component, Node, NodeKind, Page, Properties, PropertyValue, ReplicationAction, ReplicationStatus,
};
pub use crate::path::normalize as normalize_path;
pub use crate::timestamp::parse as parse_timestamp;
use std::sync::Arc;

pub type RepositoryHandle = Arc<dyn Repository>;
