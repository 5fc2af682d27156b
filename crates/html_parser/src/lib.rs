//! Permissive HTML parser.
//!
//! Tokenizes markup into text and tag tokens, then builds a DOM tree with
//! implicit-tag recovery. Parsing is total: malformed markup degrades
//! rather than erroring, and the result is always a single tree rooted at
//! an `html` element.

pub mod tokenizer;
pub mod tree_builder;

pub use tokenizer::{tokenize, Token};
pub use tree_builder::TreeBuilder;

use dom::DomTree;

/// Parse an HTML document into a DOM tree.
pub fn parse_html(input: &str) -> DomTree {
    let tokens = tokenize(input);
    let mut builder = TreeBuilder::new();
    for token in tokens {
        builder.process(token);
    }
    builder.finish()
}
