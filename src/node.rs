//! Tree node type for the document model
//!
//! A [`Node`] is a cheap-clone handle onto shared node state. Ownership runs
//! strictly downward through `children` lists; the `parent` link is a weak
//! back-reference, so dropping every handle to a subtree frees it even though
//! node and parent refer to each other.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::attribute::Attribute;
use crate::error::Result;
use crate::name;
use crate::serialize;

#[derive(Debug)]
pub(crate) struct NodeData {
    pub(crate) name: String,
    pub(crate) text: String,
    pub(crate) attributes: Vec<Attribute>,
    pub(crate) children: Vec<Node>,
    pub(crate) parent: Weak<RefCell<NodeData>>,
}

/// A named XML element with optional nested text, attributes and children.
///
/// Cloning a `Node` clones the handle, not the subtree: both handles observe
/// and apply the same mutations. Use [`Node::same`] to test handle identity.
#[derive(Clone, Debug)]
pub struct Node {
    pub(crate) inner: Rc<RefCell<NodeData>>,
}

impl Node {
    /// Creates a node with an empty text body, validating the name.
    pub fn new(name: &str) -> Result<Self> {
        Self::with_text(name, "")
    }

    /// Creates a node carrying nested text, validating the name.
    pub fn with_text(name: &str, text: impl Into<String>) -> Result<Self> {
        name::validate(name)?;
        Ok(Self {
            inner: Rc::new(RefCell::new(NodeData {
                name: name.to_string(),
                text: text.into(),
                attributes: Vec::new(),
                children: Vec::new(),
                parent: Weak::new(),
            })),
        })
    }

    /// Returns the node name.
    pub fn name(&self) -> String {
        self.inner.borrow().name.clone()
    }

    /// Renames the node, re-validating the new name.
    ///
    /// On failure the current name is kept.
    pub fn set_name(&self, name: &str) -> Result<()> {
        name::validate(name)?;
        self.inner.borrow_mut().name = name.to_string();
        Ok(())
    }

    /// Returns the nested text.
    pub fn text(&self) -> String {
        self.inner.borrow().text.clone()
    }

    /// Replaces the nested text.
    pub fn set_text(&self, text: impl Into<String>) {
        self.inner.borrow_mut().text = text.into();
    }

    /// Returns the parent node, if this node is currently held as a child.
    pub fn parent(&self) -> Option<Self> {
        self.inner
            .borrow()
            .parent
            .upgrade()
            .map(|inner| Self { inner })
    }

    /// Returns the child list in document order (a snapshot of handles).
    pub fn children(&self) -> Vec<Self> {
        self.inner.borrow().children.clone()
    }

    /// Returns the attribute list in display order (a snapshot).
    pub fn attributes(&self) -> Vec<Attribute> {
        self.inner.borrow().attributes.clone()
    }

    /// Returns true when both handles refer to the same node.
    pub fn same(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Appends an attribute. Duplicate names are preserved as given.
    pub fn add_attribute(&self, attribute: Attribute) {
        self.inner.borrow_mut().attributes.push(attribute);
    }

    /// Removes the first attribute equal to `attribute`, returning whether
    /// one was found. Linear scan over the attribute list.
    pub fn remove_attribute(&self, attribute: &Attribute) -> bool {
        let mut data = self.inner.borrow_mut();
        match data.attributes.iter().position(|a| a == attribute) {
            Some(index) => {
                data.attributes.remove(index);
                true
            }
            None => false,
        }
    }

    /// Appends `child` and points its parent link at this node.
    ///
    /// A child that already has a parent is NOT detached from the old
    /// parent's child list; only its parent link moves, leaving the node
    /// contained in both lists.
    pub fn add_child(&self, child: &Self) {
        if self.same(child) {
            return;
        }
        child.inner.borrow_mut().parent = Rc::downgrade(&self.inner);
        self.inner.borrow_mut().children.push(child.clone());
    }

    /// Removes `child` (matched by handle identity) and clears its parent
    /// link, returning whether it was found. Linear scan over the child list.
    pub fn remove_child(&self, child: &Self) -> bool {
        let found = {
            let mut data = self.inner.borrow_mut();
            match data
                .children
                .iter()
                .position(|c| Rc::ptr_eq(&c.inner, &child.inner))
            {
                Some(index) => {
                    data.children.remove(index);
                    true
                }
                None => false,
            }
        };
        if found {
            child.inner.borrow_mut().parent = Weak::new();
        }
        found
    }

    /// Renders this subtree as indented XML text.
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        serialize::render_node(self, 0, &mut out);
        out
    }

    // Removes every direct child named `name`, clearing parent links.
    pub(crate) fn remove_children_named(&self, name: &str) -> usize {
        let removed: Vec<Self> = {
            let mut data = self.inner.borrow_mut();
            let mut kept = Vec::with_capacity(data.children.len());
            let mut removed = Vec::new();
            for child in data.children.drain(..) {
                if child.inner.borrow().name == name {
                    removed.push(child);
                } else {
                    kept.push(child);
                }
            }
            data.children = kept;
            removed
        };
        for child in &removed {
            child.inner.borrow_mut().parent = Weak::new();
        }
        removed.len()
    }

    // Removes every attribute named `name`.
    pub(crate) fn remove_attributes_named(&self, name: &str) -> usize {
        let mut data = self.inner.borrow_mut();
        let before = data.attributes.len();
        data.attributes.retain(|a| a.name() != name);
        before - data.attributes.len()
    }

    // Renames every attribute named `old` to the pre-validated `new`.
    pub(crate) fn rename_attributes(&self, old: &str, new: &str) -> usize {
        let mut data = self.inner.borrow_mut();
        let mut renamed = 0;
        for attribute in data.attributes.iter_mut() {
            if attribute.name() == old {
                attribute.overwrite_name(new);
                renamed += 1;
            }
        }
        renamed
    }

    // Rename with a name the caller has already validated.
    pub(crate) fn overwrite_name(&self, name: &str) {
        self.inner.borrow_mut().name = name.to_string();
    }
}
