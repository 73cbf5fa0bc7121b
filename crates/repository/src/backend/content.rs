//! Content-model conventions shared by every repository implementation.

use super::Repository;
use crate::consts;
use crate::error::Result;
use crate::models::{Component, Node, Page, ReplicationStatus};
use crate::path;
use crate::timestamp;

pub(super) fn containing_page<R: Repository + ?Sized>(repository: &R, node: &Node) -> Result<Option<Page>> {
    if node.is_page() {
        return load_page(repository, node).map(Some);
    }
    for ancestor in path::ancestors(node.path()) {
        if let Some(candidate) = repository.resolve(ancestor)?
            && candidate.is_page()
        {
            return load_page(repository, &candidate).map(Some);
        }
    }
    Ok(None)
}

fn load_page<R: Repository + ?Sized>(repository: &R, node: &Node) -> Result<Page> {
    let mut page = Page::new(node.path());
    let content_path = path::join(node.path(), consts::JCR_CONTENT);
    let Some(content) = repository.resolve(&content_path)? else {
        return Ok(page);
    };
    let properties = content.properties();
    // Only trust the template pointer when the template is actually there;
    // a dangling pointer is handled by the caller's legacy fallback.
    if let Some(template) = properties.get_str(consts::CQ_TEMPLATE)
        && let Ok(template) = path::normalize(template)
        && repository.resolve(&template)?.is_some_and(|t| !t.is_non_existing())
    {
        page.template = Some(template);
    }
    page.last_modified = timestamp::from_property(consts::CQ_LAST_MODIFIED, properties.get(consts::CQ_LAST_MODIFIED))
        .or_else(|| timestamp::from_property(consts::JCR_LAST_MODIFIED, properties.get(consts::JCR_LAST_MODIFIED)));
    page.properties = properties.clone();
    page.content_path = Some(content_path);
    Ok(page)
}

pub(super) fn component<R: Repository + ?Sized>(repository: &R, resource_type: &str) -> Result<Option<Component>> {
    let Some(definition) = component_node(repository, resource_type)? else {
        return Ok(None);
    };
    let properties = definition.properties();
    let super_component = match properties.get_str(consts::SLING_RESOURCE_SUPER_TYPE) {
        Some(super_type) => component_node(repository, super_type)?.map(|node| node.path().to_string()),
        None => None,
    };
    Ok(Some(Component {
        path: definition.path().to_string(),
        title: properties.get_str(consts::JCR_TITLE).map(str::to_string),
        group: properties.get_str(consts::CQ_COMPONENT_GROUP).map(str::to_string),
        super_component,
    }))
}

fn component_node<R: Repository + ?Sized>(repository: &R, resource_type: &str) -> Result<Option<Node>> {
    let candidates: Vec<String> = match resource_type.starts_with('/') {
        true => vec![resource_type.to_string()],
        false => consts::SEARCH_PATHS.iter().map(|root| path::join(root, resource_type)).collect(),
    };
    for candidate in candidates {
        // A resource type that isn't a valid path simply doesn't name a component.
        let Ok(candidate) = path::normalize(&candidate) else {
            continue;
        };
        if let Some(node) = repository.resolve(&candidate)?
            && node.is_component()
        {
            return Ok(Some(node));
        }
    }
    Ok(None)
}

pub(super) fn replication_status(page: &Page) -> Option<ReplicationStatus> {
    page.content_path.as_ref()?;
    let properties = &page.properties;
    let tracked = properties.has_mixin(consts::CQ_REPLICATION_STATUS)
        || properties.contains(consts::CQ_LAST_REPLICATED)
        || properties.contains(consts::CQ_LAST_REPLICATION_ACTION);
    if !tracked {
        return None;
    }
    Some(ReplicationStatus {
        last_action: properties.get_str(consts::CQ_LAST_REPLICATION_ACTION).and_then(|action| action.parse().ok()),
        last_published: timestamp::from_property(
            consts::CQ_LAST_REPLICATED,
            properties.get(consts::CQ_LAST_REPLICATED),
        ),
    })
}
