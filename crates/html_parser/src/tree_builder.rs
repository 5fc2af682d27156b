//! Tree construction from the token stream.

use crate::tokenizer::Token;
use dom::{is_head_only_element, is_void_element, AttributeMap, DomTree, ElementData, NodeId, TagName};
use tracing::trace;

/// Builds a DOM tree from tokens, recovering from malformed markup.
///
/// Maintains a stack of open elements (top = innermost). Missing structural
/// tags (`html`, `head`, `body`, `/head`) are synthesized before each token
/// so that any input, however broken, yields a single tree rooted at `html`.
/// Nodes attach to their parent at creation; popping only shrinks the stack.
pub struct TreeBuilder {
    tree: DomTree,
    stack: Vec<NodeId>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            tree: DomTree::new(),
            stack: Vec::new(),
        }
    }

    /// Process one token.
    pub fn process(&mut self, token: Token) {
        match token {
            Token::Text(content) => self.handle_text(content),
            Token::Tag(raw) => self.handle_tag(&raw),
        }
    }

    /// Finish parsing: force a root if nothing was opened, then close all
    /// remaining open elements. The returned tree always has an `html` root.
    pub fn finish(mut self) -> DomTree {
        if self.stack.is_empty() {
            self.insert_implicit_tags("");
        }
        while self.stack.len() > 1 {
            self.stack.pop();
        }
        self.tree
    }

    fn handle_text(&mut self, content: String) {
        self.insert_implicit_tags("");
        if content.chars().all(char::is_whitespace) {
            return;
        }
        let parent = *self.stack.last().expect("implicit insertion opened a root");
        let text = self.tree.create_text(content);
        self.tree.append_child(parent, text);
    }

    fn handle_tag(&mut self, raw: &str) {
        let (name, attributes) = parse_tag(raw);
        // Comments and doctypes are discarded wholesale.
        if name.starts_with('!') || name.is_empty() {
            return;
        }
        self.insert_implicit_tags(&name);

        if let Some(name) = name.strip_prefix('/') {
            self.close_element(name);
        } else if is_void_element(&name) {
            // Void elements attach directly and are never pushed open.
            let parent = *self.stack.last().expect("implicit insertion opened a root");
            let data = ElementData::with_attributes(TagName::new(&name), attributes);
            let element = self.tree.create_element(data);
            self.tree.append_child(parent, element);
        } else {
            self.open_element(&name, attributes);
        }
    }

    /// Synthesize missing structural tags before handling a token.
    ///
    /// `pending` is the tag about to be processed, empty for text. Loops
    /// until the stack context admits the pending tag.
    fn insert_implicit_tags(&mut self, pending: &str) {
        loop {
            if self.stack.is_empty() {
                if pending == "html" {
                    break;
                }
                trace!("synthesizing <html>");
                self.open_element("html", AttributeMap::new());
            } else if self.stack.len() == 1 {
                if matches!(pending, "head" | "body" | "/html") {
                    break;
                }
                let implicit = if is_head_only_element(pending) {
                    "head"
                } else {
                    "body"
                };
                trace!("synthesizing <{implicit}>");
                self.open_element(implicit, AttributeMap::new());
            } else if self.stack.len() == 2 && self.open_element_name(1) == Some("head") {
                if pending == "/head" || is_head_only_element(pending) {
                    break;
                }
                trace!("synthesizing </head>");
                self.close_element("head");
            } else {
                break;
            }
        }
    }

    fn open_element(&mut self, name: &str, attributes: AttributeMap) {
        let data = ElementData::with_attributes(TagName::new(name), attributes);
        let id = self.tree.create_element(data);
        match self.stack.last() {
            Some(&parent) => self.tree.append_child(parent, id),
            None => self.tree.set_root(id),
        }
        self.stack.push(id);
    }

    fn close_element(&mut self, _name: &str) {
        // The root may never be closed; a stray close at depth one is a
        // no-op rather than an error.
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }

    fn open_element_name(&self, depth: usize) -> Option<&str> {
        self.tree.element_name(*self.stack.get(depth)?)
    }
}

/// Split a raw tag into its lowercase name and attribute map.
///
/// Whitespace-separated parts after the name are attributes: `key=value`
/// pairs have a single layer of surrounding quotes stripped and the value
/// lowercased; a part with no `=` becomes a boolean attribute with an empty
/// value. Malformed fragments degrade instead of failing.
pub fn parse_tag(raw: &str) -> (String, AttributeMap) {
    let mut parts = raw.split_whitespace();
    let name = parts.next().unwrap_or("").to_ascii_lowercase();
    let mut attributes = AttributeMap::new();
    for part in parts {
        match part.split_once('=') {
            Some((key, value)) => {
                attributes.set(key, strip_quotes(value).to_ascii_lowercase());
            }
            None => attributes.set(part, ""),
        }
    }
    (name, attributes)
}

fn strip_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() > 2 {
        let first = bytes[0];
        if (first == b'"' || first == b'\'') && bytes[bytes.len() - 1] == first {
            return &value[1..value.len() - 1];
        }
    }
    value
}
