//! Document wrapper around a root node

use crate::node::Node;
use crate::path;
use crate::serialize;

/// An XML document: a version/encoding header plus an optional root node.
#[derive(Clone, Debug)]
pub struct Document {
    version: f64,
    encoding: String,
    root: Option<Node>,
}

impl Document {
    /// Creates a document with no root node.
    pub fn new(version: f64, encoding: impl Into<String>) -> Self {
        Self {
            version,
            encoding: encoding.into(),
            root: None,
        }
    }

    /// Creates a document wrapping `root`.
    pub fn with_root(version: f64, encoding: impl Into<String>, root: Node) -> Self {
        Self {
            version,
            encoding: encoding.into(),
            root: Some(root),
        }
    }

    /// Returns the declared XML version.
    pub fn version(&self) -> f64 {
        self.version
    }

    /// Returns the declared encoding.
    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    /// Returns a handle to the root node, if any.
    pub fn root(&self) -> Option<Node> {
        self.root.clone()
    }

    /// Replaces the root node.
    pub fn set_root(&mut self, root: Option<Node>) {
        self.root = root;
    }

    /// Appends `node` as a direct child of the root. No-op without a root.
    pub fn add_child(&self, node: &Node) {
        if let Some(root) = &self.root {
            root.add_child(node);
        }
    }

    /// Removes `node` from the root's direct children, returning whether it
    /// was found. Always false without a root.
    pub fn remove_child(&self, node: &Node) -> bool {
        match &self.root {
            Some(root) => root.remove_child(node),
            None => false,
        }
    }

    /// Resolves a slash-separated sequence of child names against the root.
    /// See [`path::query`].
    pub fn query(&self, expression: &str) -> Vec<Node> {
        path::query(self, expression)
    }

    /// Renders the document as XML text: header line, then the root subtree.
    pub fn to_xml(&self) -> String {
        serialize::document_to_string(self)
    }
}
