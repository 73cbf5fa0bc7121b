use super::PageContext;
use serde::Serialize;

/// A property value on a node that points into the asset library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetReference {
    pub path: String,
    #[serde(rename = "fileReference")]
    pub file_reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<PageContext>,
}
