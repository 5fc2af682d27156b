//! Element attribute storage.

use indexmap::IndexMap;

/// Attribute map preserving insertion order.
///
/// Names are stored lowercase; values keep their source casing. Attributes
/// that appear without a value (e.g. `disabled`) are stored with an empty
/// string value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttributeMap {
    map: IndexMap<String, String>,
}

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute. The name is lowercased; a repeated name overwrites
    /// the earlier value without changing its position.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into().to_ascii_lowercase();
        self.map.insert(name, value.into());
    }

    /// Get an attribute value by (case-insensitive) name.
    pub fn get(&self, name: &str) -> Option<&str> {
        if name.chars().any(|c| c.is_ascii_uppercase()) {
            self.map.get(&name.to_ascii_lowercase()).map(String::as_str)
        } else {
            self.map.get(name).map(String::as_str)
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
