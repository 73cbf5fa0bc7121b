//! Loading of JSON content exports.
//!
//! The export format is the one Sling renders for `<path>.infinity.json`:
//! one JSON object per node, where nested objects are child nodes (in
//! repository order) and every other key is a property of the node.

use super::MemoryRepository;
use crate::error::{ErrorKind, Result};
use crate::models::{NodeKind, Properties, PropertyValue};
use crate::path;
use exn::ResultExt;
use serde_json::{Map, Value};
use std::collections::VecDeque;
use std::path::Path;
use tracing::instrument;

impl MemoryRepository {
    /// Build a repository from a content export mounted at `mount`.
    ///
    /// # Examples
    ///
    /// ```
    /// use refscan_repository::{MemoryRepository, Repository};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let export = serde_json::json!({
    ///     "jcr:primaryType": "cq:Page",
    ///     "jcr:content": {
    ///         "sling:resourceType": "site/components/page",
    ///         "image": { "fileReference": "/content/dam/site/hero.jpg" }
    ///     }
    /// });
    /// let repository = MemoryRepository::from_json("/content/site", &export)?;
    /// let image = repository.resolve("/content/site/jcr:content/image")?.unwrap();
    /// assert_eq!(image.properties().get_str("fileReference"), Some("/content/dam/site/hero.jpg"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_json(mount: &str, export: &Value) -> Result<Self> {
        let mut repository = Self::new();
        repository.import_json(mount, export)?;
        Ok(repository)
    }

    /// Read a content export from a file and mount it at `mount`.
    #[instrument(skip(file), fields(file = %file.as_ref().display()))]
    pub fn from_json_file(mount: &str, file: impl AsRef<Path>) -> Result<Self> {
        let file = file.as_ref();
        let bytes = std::fs::read(file).map_err(ErrorKind::Io)?;
        let export: Value =
            serde_json::from_slice(&bytes).or_raise(|| ErrorKind::InvalidExport(file.display().to_string()))?;
        let repository = Self::from_json(mount, &export)?.with_name(file.display().to_string());
        tracing::info!(nodes = repository.len(), "Loaded content export");
        Ok(repository)
    }

    /// Merge a content export into this repository at `mount`.
    ///
    /// Nodes already present are replaced (keeping their existing children).
    pub fn import_json(&mut self, mount: &str, export: &Value) -> Result<()> {
        let mount = path::normalize(mount)?;
        let Value::Object(root) = export else {
            exn::bail!(ErrorKind::InvalidExport(format!("expected an object at {mount}")));
        };
        // Breadth-first so that siblings are attached in document order.
        let mut queue: VecDeque<(String, &Map<String, Value>)> = VecDeque::from([(mount, root)]);
        while let Some((node_path, object)) = queue.pop_front() {
            let mut properties = Properties::new();
            for (key, value) in object {
                match value {
                    Value::Object(child) => {
                        if !is_node_name(key) {
                            exn::bail!(ErrorKind::InvalidExport(format!("bad node name {key:?} under {node_path}")));
                        }
                        queue.push_back((path::join(&node_path, key), child));
                    },
                    value => {
                        properties.insert(key.as_str(), property(value));
                    },
                }
            }
            self.insert(&node_path, NodeKind::Real, properties)?;
        }
        Ok(())
    }
}

/// A single path segment that neither refers to the node itself nor to its
/// parent.
fn is_node_name(key: &str) -> bool {
    !matches!(key, "" | "." | "..") && !key.contains(['/', '\0'])
}

fn property(value: &Value) -> PropertyValue {
    match value {
        Value::String(s) => PropertyValue::Single(s.clone()),
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()
            .map(PropertyValue::Multi)
            .unwrap_or(PropertyValue::Opaque),
        Value::Null => PropertyValue::Absent,
        _ => PropertyValue::Opaque,
    }
}
