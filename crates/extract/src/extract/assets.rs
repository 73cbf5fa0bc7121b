use crate::options::{ExtractOptions, SequenceReferences};
use refscan_repository::{Properties, PropertyValue};
use serde_json::Value;

/// Scans a property map for asset references, in property-name order.
///
/// Only string shapes are considered; everything else is never a reference.
/// A multi-valued property contributes one value per matching element, and
/// what that value is depends on [`SequenceReferences`].
pub fn asset_values(properties: &Properties, options: &ExtractOptions) -> Vec<String> {
    let prefix = options.asset_prefix.as_str();
    let mut values = Vec::new();
    for value in properties.values() {
        match value {
            PropertyValue::Single(value) => {
                if value.starts_with(prefix) {
                    values.push(value.clone());
                }
            },
            PropertyValue::Multi(elements) => {
                for element in elements.iter().filter(|element| element.starts_with(prefix)) {
                    values.push(match options.sequence_references {
                        SequenceReferences::Whole => whole_sequence(elements),
                        SequenceReferences::Element => element.clone(),
                    });
                }
            },
            PropertyValue::Absent | PropertyValue::Opaque => {},
        }
    }
    values.retain(|value| !value.trim().is_empty());
    values
}

/// `["a","b"]`
fn whole_sequence(elements: &[String]) -> String {
    Value::from(elements.to_vec()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn options(sequence_references: SequenceReferences) -> ExtractOptions {
        ExtractOptions {
            sequence_references,
            ..ExtractOptions::default()
        }
    }

    fn single(name: &str, value: &str) -> Properties {
        Properties::from_iter([(name, value)])
    }

    #[rstest]
    #[case::asset("/content/dam/foo.png", vec!["/content/dam/foo.png"])]
    #[case::folder("/content/dam", vec!["/content/dam"])]
    #[case::page("/content/site/en", vec![])]
    #[case::prefix_not_at_start("see /content/dam/foo.png", vec![])]
    #[case::empty("", vec![])]
    fn test_single_values(#[case] value: &str, #[case] expected: Vec<&str>) {
        let found = asset_values(&single("fileReference", value), &ExtractOptions::default());
        assert_eq!(found, expected);
    }

    #[test]
    fn test_every_property_is_scanned_in_name_order() {
        let mut properties = single("zeta", "/content/dam/z.png");
        properties.insert("alpha", "/content/dam/a.png");
        properties.insert("jcr:title", "Hello");
        properties.insert("sling:resourceType", "site/components/image");
        let found = asset_values(&properties, &ExtractOptions::default());
        assert_eq!(found, vec!["/content/dam/a.png", "/content/dam/z.png"]);
    }

    #[test]
    fn test_sequence_match_yields_whole_sequence_per_element() {
        let mut properties = Properties::new();
        properties.insert("images", vec!["/content/dam/a.png", "/content/site", "/content/dam/b.png"]);
        let found = asset_values(&properties, &options(SequenceReferences::Whole));
        let whole = r#"["/content/dam/a.png","/content/site","/content/dam/b.png"]"#;
        assert_eq!(found, vec![whole, whole]);
    }

    #[test]
    fn test_sequence_match_yields_elements() {
        let mut properties = Properties::new();
        properties.insert("images", vec!["/content/dam/a.png", "/content/site", "/content/dam/b.png"]);
        let found = asset_values(&properties, &options(SequenceReferences::Element));
        assert_eq!(found, vec!["/content/dam/a.png", "/content/dam/b.png"]);
    }

    #[rstest]
    #[case::whole(SequenceReferences::Whole)]
    #[case::element(SequenceReferences::Element)]
    fn test_sequence_without_match(#[case] mode: SequenceReferences) {
        let mut properties = Properties::new();
        properties.insert("tags", vec!["site:news", "site:sport"]);
        properties.insert("empty", Vec::<String>::new());
        assert!(asset_values(&properties, &options(mode)).is_empty());
    }

    #[test]
    fn test_opaque_values_are_skipped() {
        let mut properties = Properties::new();
        properties.insert("width", PropertyValue::Opaque);
        properties.insert("missing", PropertyValue::Absent);
        assert!(asset_values(&properties, &ExtractOptions::default()).is_empty());
    }

    #[test]
    fn test_custom_prefix() {
        let options = ExtractOptions {
            asset_prefix: "/content/assets".to_string(),
            ..ExtractOptions::default()
        };
        let mut properties = single("a", "/content/assets/logo.svg");
        properties.insert("b", "/content/dam/logo.svg");
        assert_eq!(asset_values(&properties, &options), vec!["/content/assets/logo.svg"]);
    }

    #[test]
    fn test_blank_values_are_dropped() {
        let options = ExtractOptions {
            asset_prefix: String::new(),
            ..ExtractOptions::default()
        };
        let mut properties = single("a", "   ");
        properties.insert("b", "/content/dam/x.png");
        assert_eq!(asset_values(&properties, &options), vec!["/content/dam/x.png"]);
    }
}
