//! DOM (Document Object Model) implementation.
//!
//! This crate provides the arena-backed node tree built by the HTML parser
//! and consumed by the layout engine. Nodes are owned by the arena; parent
//! links are plain indices used only for upward traversal.

pub mod attributes;
pub mod element;
pub mod node;
pub mod tree;

pub use attributes::AttributeMap;
pub use element::{is_head_only_element, is_void_element, ElementData, TagName};
pub use node::{Node, NodeData, NodeId};
pub use tree::DomTree;
