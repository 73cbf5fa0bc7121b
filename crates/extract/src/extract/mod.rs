//! Per-node record extraction.

mod assets;

pub use self::assets::asset_values;
use crate::error::{ErrorKind, Result};
use crate::format_timestamp;
use crate::models::{
    AssetReference, ComponentContext, ComponentReference, PageContext, Record, ReplicationContext,
};
use crate::options::{ExtractOptions, SuperTypeFallback};
use exn::ResultExt;
use refscan_repository::consts::CQ_LEGACY_TEMPLATE;
use refscan_repository::{Node, Repository};
use tracing::instrument;

/// Derives output records from single nodes.
///
/// Holds no state beyond its borrows, so one extractor can serve a whole
/// traversal (or several, one after the other).
#[derive(Clone, Copy)]
pub struct Extractor<'r> {
    repository: &'r dyn Repository,
    options: &'r ExtractOptions,
}
impl<'r> Extractor<'r> {
    pub fn new(repository: &'r dyn Repository, options: &'r ExtractOptions) -> Self {
        Self { repository, options }
    }

    /// Every record for a node: asset references first, then the component
    /// reference.
    pub fn records(&self, node: &Node) -> Result<Vec<Record>> {
        let mut records: Vec<Record> = self.asset_references(node)?.into_iter().map(Record::from).collect();
        records.extend(self.component_reference(node)?.map(Record::from));
        Ok(records)
    }

    /// One record per asset reference found in the node's properties.
    ///
    /// The enclosing page is only looked up when there is something to
    /// attach it to.
    #[instrument(skip(self, node), fields(path = node.path()))]
    pub fn asset_references(&self, node: &Node) -> Result<Vec<AssetReference>> {
        let values = asset_values(node.properties(), self.options);
        if values.is_empty() {
            return Ok(Vec::new());
        }
        let page = self.page_context(node)?;
        Ok(values
            .into_iter()
            .map(|file_reference| AssetReference {
                path: node.path().to_string(),
                file_reference,
                page: page.clone(),
            })
            .collect())
    }

    /// The component reference of a node, if it names a resource type.
    ///
    /// Placeholder nodes (synthetic or non-existing) never produce one, even
    /// when they carry a resource type.
    #[instrument(skip(self, node), fields(path = node.path()))]
    pub fn component_reference(&self, node: &Node) -> Result<Option<ComponentReference>> {
        if node.is_synthetic() || node.is_non_existing() {
            return Ok(None);
        }
        let Some(resource_type) = node.resource_type() else {
            return Ok(None);
        };
        Ok(Some(ComponentReference {
            resource_type: resource_type.to_string(),
            path: node.path().to_string(),
            page: self.page_context(node)?,
            component: self.component_context(node, resource_type)?,
        }))
    }

    /// Metadata of the page enclosing the node.
    pub fn page_context(&self, node: &Node) -> Result<Option<PageContext>> {
        let lookup_failed = || ErrorKind::Repository(node.path().to_string());
        let Some(page) = self.repository.containing_page(node).or_raise(lookup_failed)? else {
            return Ok(None);
        };
        let template = match page.template.as_deref() {
            Some(template) => template.to_string(),
            None => page.properties.get_str(CQ_LEGACY_TEMPLATE).unwrap_or_default().to_string(),
        };
        let replication = match self.repository.replication_status(&page).or_raise(lookup_failed)? {
            Some(status) => Some(ReplicationContext {
                is_activated: status.is_activated(),
                last_replication_action: status.last_action.map(|action| action.to_string()).unwrap_or_default(),
                last_published: format_timestamp(status.last_published)?,
            }),
            None => None,
        };
        Ok(Some(PageContext {
            path: page.path,
            template,
            last_modified: format_timestamp(page.last_modified)?,
            replication,
        }))
    }

    fn component_context(&self, node: &Node, resource_type: &str) -> Result<Option<ComponentContext>> {
        let component = self
            .repository
            .component(resource_type)
            .or_raise(|| ErrorKind::Repository(node.path().to_string()))?;
        let Some(component) = component else {
            return Ok(None);
        };
        let super_type = match (component.super_component, self.options.super_type) {
            (Some(super_component), _) => Some(super_component),
            (None, SuperTypeFallback::OwnPath) => Some(component.path.clone()),
            (None, SuperTypeFallback::Omit) => None,
        };
        Ok(Some(ComponentContext {
            path: component.path,
            super_type,
            group: component.group,
            title: component.title,
        }))
    }
}
