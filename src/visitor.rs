//! Visiting traversal over the node tree
//!
//! Every tree-wide operation in the crate is one [`Visitor`] implementation
//! driven by [`Node::accept`] instead of its own hand-written walk. The walk
//! is pre-order and mutation-tolerant: the child list is snapshotted after
//! `visit` returns, so children removed at visit time are not traversed.

use tracing::debug;

use crate::attribute::Attribute;
use crate::error::Result;
use crate::name;
use crate::node::Node;

/// Visiting contract for a traversal over a node subtree.
///
/// `visit` decides whether to descend into the node's children. After the
/// recursion into each child returns, that child's attributes are fed to
/// `visit_attribute` in list order. `end_visit` fires unconditionally once a
/// node's subtree has been handled. The attributes of the node the walk
/// starts on are not visited.
#[allow(unused_variables)]
pub trait Visitor {
    /// Visits a node; returning false prunes the subtree below it.
    fn visit(&mut self, node: &Node) -> bool {
        true
    }

    /// Called once the node's subtree has been handled.
    fn end_visit(&mut self, node: &Node) {}

    /// Visits an attribute. Attributes have no descendants, so there is no
    /// continuation decision.
    fn visit_attribute(&mut self, attribute: &Attribute) {}
}

impl Node {
    /// Walks this subtree with `visitor` according to the protocol above.
    pub fn accept(&self, visitor: &mut dyn Visitor) {
        if visitor.visit(self) {
            for child in self.children() {
                child.accept(visitor);
                for attribute in child.attributes() {
                    visitor.visit_attribute(&attribute);
                }
            }
        }
        visitor.end_visit(self);
    }

    /// Appends `attribute_name="value"` to every node in this subtree named
    /// `node_name` (this node included). The attribute name is validated once,
    /// before any node is touched.
    pub fn add_attribute_globally(
        &self,
        node_name: &str,
        attribute_name: &str,
        value: &str,
    ) -> Result<()> {
        let attribute = Attribute::new(attribute_name, value)?;
        let mut op = GlobalAttributeAdd {
            target: node_name,
            attribute,
            added: 0,
        };
        self.accept(&mut op);
        debug!(
            "added attribute {:?} to {} nodes named {:?}",
            attribute_name, op.added, node_name
        );
        Ok(())
    }

    /// Renames every node in this subtree currently named `old` to `new`
    /// (this node included). The new name is validated once, before any node
    /// is touched; each node is checked exactly once, so a node renamed to a
    /// still-matching name is not revisited.
    pub fn rename_globally(&self, old: &str, new: &str) -> Result<()> {
        name::validate(new)?;
        let mut op = GlobalRename {
            old,
            new,
            renamed: 0,
        };
        self.accept(&mut op);
        debug!("renamed {} nodes from {:?} to {:?}", op.renamed, old, new);
        Ok(())
    }

    /// On every node in this subtree named `node_name`, renames all
    /// attributes named `old` to `new`. The new name is validated once.
    pub fn rename_attribute_globally(&self, node_name: &str, old: &str, new: &str) -> Result<()> {
        name::validate(new)?;
        let mut op = GlobalAttributeRename {
            target: node_name,
            old,
            new,
            renamed: 0,
        };
        self.accept(&mut op);
        debug!(
            "renamed {} attributes from {:?} to {:?} on nodes named {:?}",
            op.renamed, old, new, node_name
        );
        Ok(())
    }

    /// Removes, at every node in this subtree, the direct children named
    /// `name`. Matching nodes are removed wherever they occur below the call
    /// site; their subtrees are not traversed.
    pub fn remove_globally(&self, name: &str) {
        let mut op = GlobalRemove { target: name, removed: 0 };
        self.accept(&mut op);
        debug!("removed {} nodes named {:?}", op.removed, name);
    }

    /// On every node in this subtree named `node_name`, removes all
    /// attributes named `attribute_name`.
    pub fn remove_attribute_globally(&self, node_name: &str, attribute_name: &str) {
        let mut op = GlobalAttributeRemove {
            target: node_name,
            attribute: attribute_name,
            removed: 0,
        };
        self.accept(&mut op);
        debug!(
            "removed {} attributes named {:?} from nodes named {:?}",
            op.removed, attribute_name, node_name
        );
    }
}

struct GlobalAttributeAdd<'a> {
    target: &'a str,
    attribute: Attribute,
    added: usize,
}

impl Visitor for GlobalAttributeAdd<'_> {
    fn visit(&mut self, node: &Node) -> bool {
        if node.name() == self.target {
            node.add_attribute(self.attribute.clone());
            self.added += 1;
        }
        true
    }
}

struct GlobalRename<'a> {
    old: &'a str,
    new: &'a str,
    renamed: usize,
}

impl Visitor for GlobalRename<'_> {
    fn visit(&mut self, node: &Node) -> bool {
        if node.name() == self.old {
            node.overwrite_name(self.new);
            self.renamed += 1;
        }
        true
    }
}

struct GlobalAttributeRename<'a> {
    target: &'a str,
    old: &'a str,
    new: &'a str,
    renamed: usize,
}

impl Visitor for GlobalAttributeRename<'_> {
    fn visit(&mut self, node: &Node) -> bool {
        if node.name() == self.target {
            self.renamed += node.rename_attributes(self.old, self.new);
        }
        true
    }
}

struct GlobalRemove<'a> {
    target: &'a str,
    removed: usize,
}

impl Visitor for GlobalRemove<'_> {
    fn visit(&mut self, node: &Node) -> bool {
        self.removed += node.remove_children_named(self.target);
        true
    }
}

struct GlobalAttributeRemove<'a> {
    target: &'a str,
    attribute: &'a str,
    removed: usize,
}

impl Visitor for GlobalAttributeRemove<'_> {
    fn visit(&mut self, node: &Node) -> bool {
        if node.name() == self.target {
            self.removed += node.remove_attributes_named(self.attribute);
        }
        true
    }
}
