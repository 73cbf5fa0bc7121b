//! In-memory content repository.

use super::{NodeIter, Repository};
use crate::error::{ErrorKind, Result};
use crate::models::{Node, NodeKind, Properties};
use crate::path;
use std::collections::HashMap;
#[cfg(any(test, feature = "mock"))]
use std::collections::HashSet;

#[derive(Debug)]
struct Entry {
    kind: NodeKind,
    properties: Properties,
    /// Full paths of the children, in insertion order.
    children: Vec<String>,
}
impl Entry {
    fn new(kind: NodeKind, properties: Properties) -> Self {
        Self { kind, properties, children: Vec::new() }
    }
}

/// Content repository held entirely in memory.
///
/// Nodes are kept in a flat map keyed by path, with each entry remembering
/// its children in insertion order. The tree is immutable once built, so all
/// [`Repository`] methods operate on `&self` without synchronisation. Used
/// for content exports (see [`from_json`](Self::from_json)) and as the test
/// double for everything downstream.
///
/// # Examples
///
/// ```
/// use refscan_repository::{MemoryRepository, NodeKind, Properties, Repository};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut repository = MemoryRepository::default();
/// repository.insert("/content/site/en", NodeKind::Real, Properties::new())?;
/// // Missing ancestors are created as synthetic placeholders.
/// let site = repository.resolve("/content/site")?.unwrap();
/// assert!(site.is_synthetic());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct MemoryRepository {
    name: String,
    entries: HashMap<String, Entry>,
    #[cfg(any(test, feature = "mock"))]
    unreadable: HashSet<String>,
}

impl MemoryRepository {
    /// Create a repository containing only the root node.
    pub fn new() -> Self {
        let mut entries = HashMap::new();
        entries.insert("/".to_string(), Entry::new(NodeKind::Real, Properties::new()));
        Self {
            name: "memory".to_string(),
            entries,
            #[cfg(any(test, feature = "mock"))]
            unreadable: HashSet::new(),
        }
    }

    /// Change the name of the repository.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Add real nodes in order.
    ///
    /// Panics if any path fails validation. If test setup is wrong, then the
    /// test should not pass.
    pub fn with_nodes(mut self, nodes: impl IntoIterator<Item = (impl AsRef<str>, Properties)>) -> Self {
        for (path, properties) in nodes {
            let path = path.as_ref();
            if self.insert(path, NodeKind::Real, properties).is_err() {
                panic!("MemoryRepository::with_nodes: invalid path {path}");
            }
        }
        self
    }

    /// Insert or replace a node.
    ///
    /// Replacing keeps the node's existing children. Inserting below a path
    /// that doesn't exist yet creates every missing ancestor as a
    /// [`Synthetic`](NodeKind::Synthetic) node.
    pub fn insert(&mut self, path: impl AsRef<str>, kind: NodeKind, properties: Properties) -> Result<()> {
        let path = path::normalize(path)?;
        if let Some(entry) = self.entries.get_mut(&path) {
            entry.kind = kind;
            entry.properties = properties;
            return Ok(());
        }
        self.attach(&path);
        self.entries.insert(path, Entry::new(kind, properties));
        Ok(())
    }

    /// Register a new path with its parent, creating synthetic ancestors as needed.
    fn attach(&mut self, path: &str) {
        let mut child = path.to_string();
        while let Some(parent) = path::parent(&child).map(str::to_string) {
            match self.entries.get_mut(&parent) {
                Some(entry) => {
                    entry.children.push(child);
                    return;
                },
                None => {
                    let mut entry = Entry::new(NodeKind::Synthetic, Properties::new());
                    entry.children.push(child);
                    self.entries.insert(parent.clone(), entry);
                    child = parent;
                },
            }
        }
    }

    /// Make every read of `path` fail with [`Unreadable`](ErrorKind::Unreadable),
    /// whether it's resolved directly or listed as a child.
    ///
    /// Panics if the path fails validation.
    #[cfg(any(test, feature = "mock"))]
    pub fn fail_on_read(mut self, path: impl AsRef<str>) -> Self {
        let Ok(path) = path::normalize(path.as_ref()) else {
            panic!("MemoryRepository::fail_on_read: invalid path {}", path.as_ref());
        };
        self.unreadable.insert(path);
        self
    }

    /// Number of nodes, including the root and synthetic placeholders.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: the root node exists from construction on and can't
    /// be removed.
    pub fn is_empty(&self) -> bool {
        false
    }

    fn read(&self, path: &str) -> Result<Option<Node>> {
        #[cfg(any(test, feature = "mock"))]
        if self.unreadable.contains(path) {
            exn::bail!(ErrorKind::Unreadable(path.to_string()));
        }
        Ok(self.entries.get(path).map(|entry| Node::new(path, entry.kind, entry.properties.clone())))
    }
}
impl Default for MemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MemoryRepository {
    fn name(&self) -> &str {
        &self.name
    }

    fn resolve(&self, path: &str) -> Result<Option<Node>> {
        let path = path::normalize(path)?;
        self.read(&path)
    }

    fn children<'a>(&'a self, node: &Node) -> NodeIter<'a> {
        let Some(entry) = self.entries.get(node.path()) else {
            return Box::new(std::iter::empty());
        };
        Box::new(entry.children.iter().map(|child| {
            self.read(child)?.ok_or_else(|| exn::Exn::from(ErrorKind::NotFound(child.clone())))
        }))
    }
}
