use serde::Serialize;

/// Metadata of the page enclosing a node, as written into records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageContext {
    pub path: String,
    /// Template path, the legacy template property, or empty.
    pub template: String,
    /// Formatted timestamp, or empty when the page was never modified.
    #[serde(rename = "pageLastModified")]
    pub last_modified: String,
    /// Only present when the page tracks its publication state.
    #[serde(flatten)]
    pub replication: Option<ReplicationContext>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplicationContext {
    pub is_activated: bool,
    /// Name of the last replication action, or empty.
    pub last_replication_action: String,
    /// Formatted timestamp, or empty when the page was never published.
    pub last_published: String,
}
