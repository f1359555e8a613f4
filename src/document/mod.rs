/*!
 * Document modeling for localization.
 *
 * This module provides an owned content tree that the substitution engine
 * walks and that the content-assignment helpers write words into:
 * - `node`: element and text node types, JSON-serializable
 * - `assign`: set element content from the word table by id, class or title
 */

pub mod assign;
pub mod node;

pub use assign::{set_for_class_elements, set_for_first_class_element, set_for_id, set_page_title};
pub use node::{Element, Node, TextNode};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Deepest element chain `Document::from_json` accepts.
pub const MAX_JSON_ELEMENT_DEPTH: usize = 63;

/// A document owning its root node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    pub root: Node,
}

impl Document {
    pub fn new(root: impl Into<Node>) -> Self {
        Self { root: root.into() }
    }

    /// Load a document from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read document: {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to parse document: {}", path.display()))
    }

    /// Parse a document from JSON.
    ///
    /// serde_json stops at 128 nesting levels and every element takes two
    /// (its object and its `children` array), so trees deeper than about 64
    /// elements are rejected with a "recursion limit exceeded" error.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).with_context(|| {
            format!(
                "Invalid document JSON (element nesting is limited to {} levels)",
                MAX_JSON_ELEMENT_DEPTH
            )
        })
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Default traversal root: the first `body` element, or the whole tree.
    pub fn body(&mut self) -> &mut Node {
        let path = body_path(&self.root).unwrap_or_default();

        let mut node = &mut self.root;
        for index in path {
            node = match node {
                Node::Element(element) => &mut element.children[index],
                Node::Text(_) => break,
            };
        }
        node
    }
}

/// Child indices leading from `node` to the first `body` element in pre-order.
fn body_path(node: &Node) -> Option<Vec<usize>> {
    // (node, depth, index within its parent)
    let mut stack: Vec<(&Node, usize, usize)> = vec![(node, 0, 0)];
    let mut path = Vec::new();

    while let Some((node, depth, index)) = stack.pop() {
        let Node::Element(element) = node else {
            continue;
        };
        if depth > 0 {
            path.truncate(depth - 1);
            path.push(index);
        }
        if element.tag.eq_ignore_ascii_case("body") {
            return Some(path);
        }
        stack.extend(
            element
                .children
                .iter()
                .enumerate()
                .rev()
                .map(|(index, child)| (child, depth + 1, index)),
        );
    }
    None
}
