use crate::consts;
use std::collections::BTreeMap;
use std::collections::btree_map::Iter as MapIter;

/// A single property value as stored on a node.
///
/// Content repositories hand back untyped values; only the two string shapes
/// matter for extraction, everything else collapses into [`Opaque`](Self::Opaque).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PropertyValue {
    /// The property is not set on the node.
    #[default]
    Absent,
    /// A single string.
    Single(String),
    /// An ordered sequence of strings (multi-valued property).
    Multi(Vec<String>),
    /// Any non-string shape: numbers, booleans, binaries, mixed arrays.
    Opaque,
}
impl PropertyValue {
    /// Returns the value if this is a [`Single`](Self::Single) string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Single(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns every string contained in the value, regardless of shape.
    pub fn strings(&self) -> &[String] {
        match self {
            Self::Single(s) => std::slice::from_ref(s),
            Self::Multi(values) => values.as_slice(),
            Self::Absent | Self::Opaque => &[],
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}
impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}
impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}
impl From<Vec<String>> for PropertyValue {
    fn from(values: Vec<String>) -> Self {
        Self::Multi(values)
    }
}
impl From<Vec<&str>> for PropertyValue {
    fn from(values: Vec<&str>) -> Self {
        Self::Multi(values.into_iter().map(str::to_string).collect())
    }
}

/// Property map of a node, ordered by property name.
///
/// Looking up a property that isn't set yields [`PropertyValue::Absent`]
/// instead of `None`, so callers only ever match on one type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    values: BTreeMap<String, PropertyValue>,
}
impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> &PropertyValue {
        static ABSENT: PropertyValue = PropertyValue::Absent;
        self.values.get(name).unwrap_or(&ABSENT)
    }

    /// Shorthand for a property that must be a single, non-blank string.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).as_str().filter(|s| !s.trim().is_empty())
    }

    pub fn contains(&self, name: &str) -> bool {
        !self.get(name).is_absent()
    }

    /// Whether `jcr:mixinTypes` lists the given mixin.
    pub fn has_mixin(&self, mixin: &str) -> bool {
        self.get(consts::JCR_MIXIN_TYPES).strings().iter().any(|m| m == mixin)
    }

    /// Insert a value, returning the previous one. Inserting
    /// [`Absent`](PropertyValue::Absent) removes the property.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> PropertyValue {
        let name = name.into();
        let previous = match value.into() {
            PropertyValue::Absent => self.values.remove(&name),
            value => self.values.insert(name, value),
        };
        previous.unwrap_or_default()
    }

    pub fn iter(&self) -> MapIter<'_, String, PropertyValue> {
        self.values.iter()
    }

    pub fn values(&self) -> impl Iterator<Item = &PropertyValue> {
        self.values.values()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
impl<K: Into<String>, V: Into<PropertyValue>> FromIterator<(K, V)> for Properties {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut properties = Self::new();
        for (name, value) in iter {
            properties.insert(name, value);
        }
        properties
    }
}
impl<'a> IntoIterator for &'a Properties {
    type Item = (&'a String, &'a PropertyValue);
    type IntoIter = MapIter<'a, String, PropertyValue>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
