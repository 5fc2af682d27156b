//! DOM Node implementation.

use crate::element::ElementData;
use slotmap::new_key_type;
use smallvec::SmallVec;

new_key_type! {
    /// Unique identifier for a DOM node.
    pub struct NodeId;
}

/// Data specific to each node type.
///
/// The parser only ever produces elements and text (comments and doctypes
/// are discarded during tokenization handling), so the variant set is closed
/// and traversal can match exhaustively.
#[derive(Clone, Debug)]
pub enum NodeData {
    Element(ElementData),
    Text { content: String },
}

/// A DOM node.
#[derive(Clone, Debug)]
pub struct Node {
    /// Unique identifier.
    pub id: NodeId,
    /// Node-specific data.
    pub data: NodeData,
    /// Parent node. Non-owning; used only for upward traversal.
    pub parent: Option<NodeId>,
    /// Child nodes, in document order.
    pub children: SmallVec<[NodeId; 8]>,
}

impl Node {
    pub fn new(id: NodeId, data: NodeData) -> Self {
        Self {
            id,
            data,
            parent: None,
            children: SmallVec::new(),
        }
    }

    pub fn new_element(id: NodeId, data: ElementData) -> Self {
        Self::new(id, NodeData::Element(data))
    }

    pub fn new_text(id: NodeId, content: String) -> Self {
        Self::new(id, NodeData::Text { content })
    }

    /// Check if this is an element node.
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Check if this is a text node.
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self.data, NodeData::Text { .. })
    }

    /// Get element data if this is an element.
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(data) => Some(data),
            NodeData::Text { .. } => None,
        }
    }

    /// Get text content if this is a text node.
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text { content } => Some(content),
            NodeData::Element(_) => None,
        }
    }

    /// Check if node has children.
    #[inline]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Get first child.
    #[inline]
    pub fn first_child(&self) -> Option<NodeId> {
        self.children.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ElementData, TagName};
    use slotmap::SlotMap;

    #[test]
    fn test_node_variants() {
        let mut nodes: SlotMap<NodeId, ()> = SlotMap::with_key();
        let id = nodes.insert(());

        let elem = Node::new_element(id, ElementData::new(TagName::new("div")));
        assert!(elem.is_element());
        assert!(!elem.is_text());
        assert_eq!(elem.as_element().unwrap().tag_name.as_str(), "div");

        let text = Node::new_text(id, "hello".to_string());
        assert!(text.is_text());
        assert_eq!(text.as_text(), Some("hello"));
    }
}
