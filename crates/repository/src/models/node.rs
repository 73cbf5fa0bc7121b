use super::Properties;
use crate::consts;
use crate::path;

/// How much real content backs a node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A persisted node.
    #[default]
    Real,
    /// A placeholder standing in for an intermediate path that has no node
    /// of its own (e.g. a mount point). Its children are still real.
    Synthetic,
    /// A placeholder handed out for a path that doesn't resolve.
    NonExisting,
}

/// One addressable unit in the content tree.
///
/// Nodes are snapshots: the repository hands out owned copies and never
/// changes them afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    path: String,
    kind: NodeKind,
    properties: Properties,
}
impl Node {
    /// Create a node. The path is expected to be normalized already (see
    /// [`normalize_path`](crate::normalize_path)).
    pub fn new(path: impl Into<String>, kind: NodeKind, properties: Properties) -> Self {
        Self { path: path.into(), kind, properties }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> &str {
        path::name(&self.path)
    }

    pub fn parent_path(&self) -> Option<&str> {
        path::parent(&self.path)
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn is_synthetic(&self) -> bool {
        self.kind == NodeKind::Synthetic
    }

    pub fn is_non_existing(&self) -> bool {
        self.kind == NodeKind::NonExisting
    }

    /// Value of the `jcr:primaryType` property.
    pub fn primary_type(&self) -> Option<&str> {
        self.properties.get_str(consts::JCR_PRIMARY_TYPE)
    }

    /// Value of the `sling:resourceType` property, if set and not blank.
    pub fn resource_type(&self) -> Option<&str> {
        self.properties.get_str(consts::SLING_RESOURCE_TYPE)
    }

    pub fn is_page(&self) -> bool {
        self.primary_type() == Some(consts::CQ_PAGE)
    }

    pub fn is_component(&self) -> bool {
        self.primary_type() == Some(consts::CQ_COMPONENT)
    }
}
