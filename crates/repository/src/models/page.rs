use super::Properties;
use time::OffsetDateTime;

/// A publishable unit of content.
///
/// Most of a page's metadata lives on its `jcr:content` child rather than on
/// the page node itself; [`properties`](Self::properties) are the content
/// node's properties (empty when the page has no content node).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Path of the page node (not its content node).
    pub path: String,
    /// Path of the `jcr:content` child, if the page has one.
    pub content_path: Option<String>,
    /// Properties of the content node.
    pub properties: Properties,
    /// Path of the page's template, only set when the template pointer
    /// resolves to a node that exists.
    pub template: Option<String>,
    /// Last modification of the page content.
    pub last_modified: Option<OffsetDateTime>,
}
impl Page {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content_path: None,
            properties: Properties::new(),
            template: None,
            last_modified: None,
        }
    }
}
