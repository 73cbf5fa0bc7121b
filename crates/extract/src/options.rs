use crate::consts::DEFAULT_ASSET_PREFIX;
use serde::{Deserialize, Serialize};

/// What an asset reference found inside a multi-valued property points at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SequenceReferences {
    /// Every matching element produces a record carrying the *whole* sequence,
    /// serialized as a JSON array. Output-compatible with earlier reports.
    #[default]
    Whole,
    /// Every matching element produces a record carrying just that element.
    Element,
}

/// What `superType` holds when a component has no super-component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuperTypeFallback {
    /// The component's own path. Output-compatible with earlier reports.
    #[default]
    OwnPath,
    /// Leave `superType` out of the record.
    Omit,
}

/// Knobs for record extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    /// Prefix identifying asset references.
    pub asset_prefix: String,
    pub sequence_references: SequenceReferences,
    pub super_type: SuperTypeFallback,
}
impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            asset_prefix: DEFAULT_ASSET_PREFIX.to_string(),
            sequence_references: SequenceReferences::default(),
            super_type: SuperTypeFallback::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_output_compatible() {
        let options = ExtractOptions::default();
        assert_eq!(options.asset_prefix, "/content/dam");
        assert_eq!(options.sequence_references, SequenceReferences::Whole);
        assert_eq!(options.super_type, SuperTypeFallback::OwnPath);
    }

    #[test]
    fn test_partial_deserialize() {
        let options: ExtractOptions = serde_json::from_str(r#"{"super_type": "omit"}"#).unwrap();
        assert_eq!(options.super_type, SuperTypeFallback::Omit);
        assert_eq!(options.asset_prefix, "/content/dam");
        let options: ExtractOptions = serde_json::from_str(r#"{"sequence_references": "element"}"#).unwrap();
        assert_eq!(options.sequence_references, SequenceReferences::Element);
    }
}
