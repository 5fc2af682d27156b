//! Element data and tag-name classification.

use crate::attributes::AttributeMap;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Global tag-name intern pool. Documents repeat a handful of tag names
/// thousands of times, so sharing one allocation per distinct name keeps
/// element data cheap to clone.
static TAG_NAMES: Lazy<Mutex<HashSet<Arc<str>>>> = Lazy::new(|| Mutex::new(HashSet::new()));

/// Tags whose end tag is implied by the markup (HTML void elements).
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Tags that belong in `<head>` rather than `<body>`.
const HEAD_ELEMENTS: &[&str] = &[
    "base", "basefont", "bgsound", "noscript", "link", "meta", "title", "style", "script",
];

/// An interned, lowercase tag name.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TagName(Arc<str>);

impl TagName {
    /// Intern a tag name. The name must already be lowercase; the tree
    /// builder lowercases names when it splits a raw tag.
    pub fn new(name: &str) -> Self {
        debug_assert!(!name.chars().any(|c| c.is_ascii_uppercase()));
        let mut pool = TAG_NAMES.lock();
        if let Some(interned) = pool.get(name) {
            return Self(Arc::clone(interned));
        }
        let interned: Arc<str> = Arc::from(name);
        pool.insert(Arc::clone(&interned));
        Self(interned)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TagName({:?})", &*self.0)
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for TagName {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for TagName {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

/// Check if a tag is a void element (no end tag, never pushed open).
pub fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

/// Check if a tag belongs in the document head.
pub fn is_head_only_element(name: &str) -> bool {
    HEAD_ELEMENTS.contains(&name)
}

/// Data for an element node.
#[derive(Clone, Debug)]
pub struct ElementData {
    /// Lowercase tag name.
    pub tag_name: TagName,
    /// Element attributes.
    pub attributes: AttributeMap,
}

impl ElementData {
    pub fn new(tag_name: TagName) -> Self {
        Self {
            tag_name,
            attributes: AttributeMap::new(),
        }
    }

    pub fn with_attributes(tag_name: TagName, attributes: AttributeMap) -> Self {
        Self {
            tag_name,
            attributes,
        }
    }

    /// Check if this element is a void element.
    pub fn is_void(&self) -> bool {
        is_void_element(self.tag_name.as_str())
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_name_interning() {
        let a = TagName::new("div");
        let b = TagName::new("div");
        assert!(Arc::ptr_eq(&a.0, &b.0));
        assert_eq!(a, "div");
    }

    #[test]
    fn test_void_classification() {
        assert!(is_void_element("br"));
        assert!(is_void_element("img"));
        assert!(!is_void_element("p"));
        assert!(!is_void_element("div"));
    }

    #[test]
    fn test_head_classification() {
        assert!(is_head_only_element("title"));
        assert!(is_head_only_element("meta"));
        assert!(!is_head_only_element("p"));
        // link and meta are both void and head-only
        assert!(is_head_only_element("link") && is_void_element("link"));
    }
}
