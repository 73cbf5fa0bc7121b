/// A rendering definition referenced by a node's resource type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    /// Path of the component definition node.
    pub path: String,
    /// `jcr:title`
    pub title: Option<String>,
    /// `componentGroup`
    pub group: Option<String>,
    /// Path of the nearest super-component, when `sling:resourceSuperType`
    /// points at another component.
    pub super_component: Option<String>,
}
impl Component {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: None,
            group: None,
            super_component: None,
        }
    }
}
