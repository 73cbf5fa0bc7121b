//! Property names and node types of the content model.

pub const JCR_PRIMARY_TYPE: &str = "jcr:primaryType";
pub const JCR_MIXIN_TYPES: &str = "jcr:mixinTypes";
pub const JCR_CONTENT: &str = "jcr:content";
pub const JCR_TITLE: &str = "jcr:title";
pub const JCR_LAST_MODIFIED: &str = "jcr:lastModified";

pub const SLING_RESOURCE_TYPE: &str = "sling:resourceType";
pub const SLING_RESOURCE_SUPER_TYPE: &str = "sling:resourceSuperType";

pub const CQ_PAGE: &str = "cq:Page";
pub const CQ_COMPONENT: &str = "cq:Component";
pub const CQ_TEMPLATE: &str = "cq:template";
/// Template pointer written by older authoring tools (note the capital `T`).
pub const CQ_LEGACY_TEMPLATE: &str = "cq:Template";
pub const CQ_LAST_MODIFIED: &str = "cq:lastModified";
pub const CQ_COMPONENT_GROUP: &str = "componentGroup";

pub const CQ_REPLICATION_STATUS: &str = "cq:ReplicationStatus";
pub const CQ_LAST_REPLICATED: &str = "cq:lastReplicated";
pub const CQ_LAST_REPLICATION_ACTION: &str = "cq:lastReplicationAction";

/// Roots searched, in order, when a resource type is not absolute.
pub const SEARCH_PATHS: [&str; 2] = ["/apps", "/libs"];
