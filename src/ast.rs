use crate::error::BuildError;
use crate::types::{Attributes, DictionaryItem, RandomItemGetter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Sentence,
    Fragment,
    Template,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Sentence => "sentence",
            NodeKind::Fragment => "fragment",
            NodeKind::Template => "template",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sentence" => Ok(NodeKind::Sentence),
            "fragment" => Ok(NodeKind::Fragment),
            "template" => Ok(NodeKind::Template),
            other => Err(BuildError::UnknownElementKind(other.to_string())),
        }
    }
}

/// Anything a caller may pass as a child. Which variants a node keeps,
/// rejects, or drops depends on the parent kind; see the builder.
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    Node(Node),
    Text(String),
    Getter(RandomItemGetter),
    Items(Vec<DictionaryItem>),
    /// A stray non-node value (null, bool, number) left over from
    /// conditional composition at an untyped boundary.
    Raw(serde_json::Value),
}

impl Child {
    /// Short description used in error messages.
    pub fn describe(&self) -> String {
        match self {
            Child::Node(node) => format!("{} node", node.kind()),
            Child::Text(_) => "text".to_string(),
            Child::Getter(_) => "generator".to_string(),
            Child::Items(_) => "dictionary items".to_string(),
            Child::Raw(value) => format!("raw value {}", value),
        }
    }
}

impl From<Node> for Child {
    fn from(node: Node) -> Self {
        Child::Node(node)
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Child::Text(text.to_string())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Child::Text(text)
    }
}

impl From<RandomItemGetter> for Child {
    fn from(getter: RandomItemGetter) -> Self {
        Child::Getter(getter)
    }
}

impl From<Vec<DictionaryItem>> for Child {
    fn from(items: Vec<DictionaryItem>) -> Self {
        Child::Items(items)
    }
}

impl From<serde_json::Value> for Child {
    fn from(value: serde_json::Value) -> Self {
        Child::Raw(value)
    }
}

/// A validated tree node. Fields are private: the kind is fixed at
/// construction and the node owns its attributes and children outright.
/// Only the builder creates these, so an existing node is always
/// well-formed with respect to its direct children.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: NodeKind,
    attributes: Attributes,
    children: Vec<Child>,
}

impl Node {
    pub(crate) fn new(kind: NodeKind, attributes: Attributes, children: Vec<Child>) -> Self {
        Node {
            kind,
            attributes,
            children,
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }

    /// Consume the node, handing ownership of its parts to a renderer.
    pub fn into_parts(self) -> (NodeKind, Attributes, Vec<Child>) {
        (self.kind, self.attributes, self.children)
    }
}
