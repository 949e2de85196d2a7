//! Fluent construction sugar over the core node API
//!
//! Pure convenience: everything here goes through the public `Node`,
//! `Attribute` and `Document` contracts and adds no invariants of its own.

use crate::attribute::Attribute;
use crate::document::Document;
use crate::error::Result;
use crate::node::Node;

/// Builds a node tree bottom-up in expression position.
///
/// ```
/// use xmlgrove::{builder, NodeBuilder};
///
/// # fn main() -> Result<(), xmlgrove::Error> {
/// let document = builder::document(
///     1.0,
///     "UTF-8",
///     NodeBuilder::new("plano")?.child(
///         NodeBuilder::new("curso")?
///             .text("Mestrado em Engenharia Informática")
///             .attribute("codigo", "M4310")?,
///     ),
/// );
/// assert_eq!(document.query("curso").len(), 1);
/// # Ok(())
/// # }
/// ```
pub struct NodeBuilder {
    node: Node,
}

impl NodeBuilder {
    /// Starts a builder for a node named `name`.
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self {
            node: Node::new(name)?,
        })
    }

    /// Sets the nested text.
    pub fn text(self, text: impl Into<String>) -> Self {
        self.node.set_text(text);
        self
    }

    /// Appends an attribute.
    pub fn attribute(self, name: &str, value: impl Into<String>) -> Result<Self> {
        self.node.add_attribute(Attribute::new(name, value)?);
        Ok(self)
    }

    /// Appends a finished child builder.
    pub fn child(self, child: Self) -> Self {
        self.node.add_child(&child.node);
        self
    }

    /// Returns the built node.
    pub fn build(self) -> Node {
        self.node
    }
}

/// Wraps a built root node in a document.
pub fn document(version: f64, encoding: &str, root: NodeBuilder) -> Document {
    Document::with_root(version, encoding, root.build())
}
