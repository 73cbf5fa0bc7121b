use super::PageContext;
use serde::Serialize;

/// A node rendered by a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentReference {
    #[serde(rename = "resourceType")]
    pub resource_type: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<PageContext>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<ComponentContext>,
}

/// The component definition behind a resource type.
///
/// `group` and `title` are written as `null` when the definition doesn't set
/// them, so every component object has the same keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentContext {
    pub path: String,
    #[serde(rename = "superType", skip_serializing_if = "Option::is_none")]
    pub super_type: Option<String>,
    pub group: Option<String>,
    pub title: Option<String>,
}
