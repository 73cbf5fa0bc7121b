//! Repository trait and implementations.
//!
//! This module defines the `Repository` trait, a read-only view of a content
//! tree. Implementations only have to know how to look nodes up and list
//! their children; the content-model conventions (what makes a node a page, a
//! component, or replicated) are provided on top of those two primitives.

mod content;
mod json;
mod memory;

pub use self::memory::MemoryRepository;
use crate::error::Result;
use crate::models::{Component, Node, Page, ReplicationStatus};

/// Ordered children of a node. A child that cannot be read is yielded as an
/// error item in its place; iteration may continue past it.
pub type NodeIter<'a> = Box<dyn Iterator<Item = Result<Node>> + 'a>;

/// Read-only access to a hierarchical content repository.
///
/// All operations are synchronous and never mutate the tree. Lookups that
/// come up empty (no enclosing page, no component definition, no replication
/// data) return `Ok(None)`; errors are reserved for structural failures.
///
/// # Examples
///
/// ```
/// use refscan_repository::{MemoryRepository, Repository, Properties};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let repository = MemoryRepository::default().with_nodes([
///     ("/content/site", Properties::from_iter([("jcr:primaryType", "cq:Page")])),
///     ("/content/site/jcr:content", Properties::from_iter([("jcr:title", "Site")])),
/// ]);
/// let root = repository.resolve("/content")?.expect("created as an ancestor");
/// for child in repository.children(&root) {
///     let child = child?;
///     println!("{} (page: {})", child.path(), child.is_page());
/// }
/// # Ok(())
/// # }
/// ```
pub trait Repository: Send + Sync {
    /// Name of the repository, used for logging only.
    fn name(&self) -> &str;

    /// Look a node up by path.
    ///
    /// The path is normalized first; paths that can't be normalized return
    /// [`InvalidPath`](crate::error::ErrorKind::InvalidPath). Paths that
    /// don't resolve return `Ok(None)`, although implementations may instead
    /// hand out a [`NonExisting`](crate::NodeKind::NonExisting) placeholder.
    fn resolve(&self, path: &str) -> Result<Option<Node>>;

    /// List the children of a node, in repository order.
    fn children<'a>(&'a self, node: &Node) -> NodeIter<'a>;

    /// Nearest page enclosing the node (the node itself if it is a page).
    fn containing_page(&self, node: &Node) -> Result<Option<Page>> {
        content::containing_page(self, node)
    }

    /// Component definition that renders the given resource type.
    ///
    /// Absolute resource types are looked up directly, relative ones against
    /// each of the [search paths](crate::consts::SEARCH_PATHS) in order.
    fn component(&self, resource_type: &str) -> Result<Option<Component>> {
        content::component(self, resource_type)
    }

    /// Publication state of a page, if the page's content tracks one.
    fn replication_status(&self, page: &Page) -> Result<Option<ReplicationStatus>> {
        Ok(content::replication_status(page))
    }
}
