/*!
 * Core node types for localizable documents.
 *
 * These types provide a JSON-serializable content tree: element nodes with
 * ordered children and text leaves carrying a string value. The `type`
 * field discriminates the two kinds.
 */

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A node in a document tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    /// Element with ordered children
    Element(Element),

    /// Text-bearing leaf
    Text(TextNode),
}

impl Node {
    /// Create a text leaf.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(TextNode {
            value: value.into(),
        })
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(&text.value),
            Node::Element(_) => None,
        }
    }

    /// Concatenated text of this node and all descendants, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&text.value),
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Number of nodes in this subtree, including itself.
    pub fn node_count(&self) -> usize {
        match self {
            Node::Text(_) => 1,
            Node::Element(element) => 1 + element.children.iter().map(Node::node_count).sum::<usize>(),
        }
    }

    /// First element in pre-order, starting with this node, that satisfies `predicate`.
    pub fn find_element_mut<F>(&mut self, predicate: F) -> Option<&mut Element>
    where
        F: Fn(&Element) -> bool,
    {
        let mut stack: Vec<&mut Node> = vec![self];
        while let Some(node) = stack.pop() {
            if let Node::Element(element) = node {
                if predicate(&*element) {
                    return Some(element);
                }
                stack.extend(element.children.iter_mut().rev());
            }
        }
        None
    }

    /// Every element in pre-order that satisfies `predicate`.
    ///
    /// Matches nested inside another match are not returned.
    pub fn find_elements_mut<F>(&mut self, predicate: F) -> Vec<&mut Element>
    where
        F: Fn(&Element) -> bool,
    {
        let mut found = Vec::new();
        let mut stack: Vec<&mut Node> = vec![self];
        while let Some(node) = stack.pop() {
            if let Node::Element(element) = node {
                if predicate(&*element) {
                    found.push(element);
                } else {
                    stack.extend(element.children.iter_mut().rev());
                }
            }
        }
        found
    }
}

/// A text leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextNode {
    pub value: String,
}

/// An element node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Tag name, e.g. "div"
    pub tag: String,

    /// Element id attribute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Class names
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,

    /// Any other attributes
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,

    /// Ordered children
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            id: None,
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_text(self, value: &str) -> Self {
        self.with_child(Node::text(value))
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Replace all children with one text leaf.
    pub fn set_text_content(&mut self, value: impl Into<String>) {
        self.children = vec![Node::text(value)];
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}
