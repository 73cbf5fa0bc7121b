mod asset;
mod component;
mod page;

pub use self::asset::AssetReference;
pub use self::component::{ComponentContext, ComponentReference};
pub use self::page::{PageContext, ReplicationContext};
use serde::Serialize;

/// One line of output.
///
/// Serialized without a tag: the two shapes are told apart by their keys
/// (`fileReference` vs `resourceType`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Asset(AssetReference),
    Component(ComponentReference),
}
impl From<AssetReference> for Record {
    fn from(record: AssetReference) -> Self {
        Self::Asset(record)
    }
}
impl From<ComponentReference> for Record {
    fn from(record: ComponentReference) -> Self {
        Self::Component(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page(replication: Option<ReplicationContext>) -> PageContext {
        PageContext {
            path: "/content/site".to_string(),
            template: "/conf/site/templates/article".to_string(),
            last_modified: "2024-01-02 03:04:05.6789".to_string(),
            replication,
        }
    }

    #[test]
    fn test_asset_without_page_has_no_page_key() {
        let record = Record::from(AssetReference {
            path: "/content/site/jcr:content/image".to_string(),
            file_reference: "/content/dam/a.png".to_string(),
            page: None,
        });
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"path":"/content/site/jcr:content/image","fileReference":"/content/dam/a.png"}"#
        );
    }

    #[test]
    fn test_page_replication_fields_are_flattened() {
        let with = serde_json::to_value(page(Some(ReplicationContext {
            is_activated: true,
            last_replication_action: "Activate".to_string(),
            last_published: String::new(),
        })))
        .unwrap();
        assert_eq!(
            with,
            json!({
                "path": "/content/site",
                "template": "/conf/site/templates/article",
                "pageLastModified": "2024-01-02 03:04:05.6789",
                "isActivated": true,
                "lastReplicationAction": "Activate",
                "lastPublished": ""
            })
        );
        let without = serde_json::to_value(page(None)).unwrap();
        assert_eq!(without.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_component_key_order_and_nulls() {
        let record = Record::from(ComponentReference {
            resource_type: "site/components/text".to_string(),
            path: "/content/site/jcr:content/text".to_string(),
            page: None,
            component: Some(ComponentContext {
                path: "/apps/site/components/text".to_string(),
                super_type: None,
                group: None,
                title: Some("Text".to_string()),
            }),
        });
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            concat!(
                r#"{"resourceType":"site/components/text","path":"/content/site/jcr:content/text","#,
                r#""component":{"path":"/apps/site/components/text","group":null,"title":"Text"}}"#
            )
        );
    }
}
