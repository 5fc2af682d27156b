//! Arena-backed DOM tree.

use crate::element::ElementData;
use crate::node::{Node, NodeData, NodeId};
use slotmap::SlotMap;

/// The document tree.
///
/// All nodes live in a slotmap arena; identity is the arena key. The tree
/// has at most one root, set by the parser once the document element is
/// known. A finished parse always has an `html` root, but a tree under
/// construction may briefly have none.
#[derive(Clone, Debug, Default)]
pub struct DomTree {
    nodes: SlotMap<NodeId, Node>,
    root: Option<NodeId>,
}

impl DomTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Root node, if set.
    #[inline]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Set the document root. The node must be detached.
    pub fn set_root(&mut self, id: NodeId) {
        debug_assert!(self.nodes[id].parent.is_none());
        self.root = Some(id);
    }

    /// Create a detached element node.
    pub fn create_element(&mut self, data: ElementData) -> NodeId {
        self.nodes.insert_with_key(|id| Node::new_element(id, data))
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, content: String) -> NodeId {
        self.nodes.insert_with_key(|id| Node::new_text(id, content))
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append a detached node as the last child of `parent`.
    ///
    /// Panics in debug builds if the child is already attached; the parser
    /// attaches each node exactly once, at creation.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        debug_assert!(self.nodes[child].parent.is_none());
        self.nodes[child].parent = Some(parent);
        self.nodes[parent].children.push(child);
    }

    /// Children of a node, in document order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Parent of a node.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|n| n.parent)
    }

    /// Tag name of a node, if it is an element.
    pub fn element_name(&self, id: NodeId) -> Option<&str> {
        self.get(id)?.as_element().map(|e| e.tag_name.as_str())
    }

    /// Pre-order traversal starting at `start`.
    pub fn descendants(&self, start: NodeId) -> Descendants<'_> {
        Descendants {
            tree: self,
            stack: vec![start],
        }
    }

    /// First child of `parent` with the given tag name.
    pub fn find_child_element(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.children(parent)
            .iter()
            .copied()
            .find(|&c| self.element_name(c) == Some(name))
    }

    /// Concatenated text content of the subtree rooted at `id`.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        for node_id in self.descendants(id) {
            if let Some(NodeData::Text { content }) = self.get(node_id).map(|n| &n.data) {
                out.push_str(content);
            }
        }
        out
    }
}

/// Pre-order iterator over a subtree.
pub struct Descendants<'a> {
    tree: &'a DomTree,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        let children = self.tree.children(id);
        self.stack.extend(children.iter().rev().copied());
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::TagName;

    fn element(tree: &mut DomTree, name: &str) -> NodeId {
        tree.create_element(ElementData::new(TagName::new(name)))
    }

    #[test]
    fn test_build_and_traverse() {
        let mut tree = DomTree::new();
        let html = element(&mut tree, "html");
        let body = element(&mut tree, "body");
        let text = tree.create_text("hello".to_string());
        tree.set_root(html);
        tree.append_child(html, body);
        tree.append_child(body, text);

        assert_eq!(tree.root(), Some(html));
        assert_eq!(tree.parent(text), Some(body));
        assert_eq!(tree.children(html), &[body]);

        let order: Vec<_> = tree
            .descendants(html)
            .map(|id| tree.element_name(id).unwrap_or("#text").to_string())
            .collect();
        assert_eq!(order, vec!["html", "body", "#text"]);
    }

    #[test]
    fn test_document_order() {
        let mut tree = DomTree::new();
        let root = element(&mut tree, "body");
        let a = tree.create_text("a".to_string());
        let b = element(&mut tree, "b");
        let c = tree.create_text("c".to_string());
        tree.set_root(root);
        tree.append_child(root, a);
        tree.append_child(root, b);
        tree.append_child(b, c);

        assert_eq!(tree.children(root), &[a, b]);
        assert_eq!(tree.text_content(root), "ac");
    }

    #[test]
    fn test_find_child_element() {
        let mut tree = DomTree::new();
        let html = element(&mut tree, "html");
        let head = element(&mut tree, "head");
        let body = element(&mut tree, "body");
        tree.set_root(html);
        tree.append_child(html, head);
        tree.append_child(html, body);

        assert_eq!(tree.find_child_element(html, "body"), Some(body));
        assert_eq!(tree.find_child_element(html, "div"), None);
    }
}
