//! Declarative object-to-node mapping
//!
//! A [`Registry`] holds one [`TypeMapping`] per mapped Rust type: a display
//! name, an ordered field list and an optional post-build adapter. Mapping a
//! value walks its fields in ascending order-key order (keyless fields last,
//! ties in declaration order), turning attribute fields into attributes and
//! child fields into child nodes, recursing through the registry for sequence
//! items. There is no runtime reflection: the descriptor is the single source
//! of truth for what a type looks like as XML.
//!
//! ```
//! use xmlgrove::{FieldMapping, Registry, TypeMapping};
//!
//! struct Componente {
//!     nome: String,
//!     peso: u32,
//! }
//!
//! # fn main() -> Result<(), xmlgrove::Error> {
//! let mut registry = Registry::new();
//! registry.register::<Componente>(
//!     TypeMapping::new("componente")
//!         .field(
//!             FieldMapping::attribute("nome", |c: &Componente| Some(c.nome.clone()))
//!                 .order(2)
//!                 .transform(|s| s.to_uppercase()),
//!         )
//!         .field(
//!             FieldMapping::attribute("peso", |c: &Componente| Some(c.peso.to_string()))
//!                 .order(1)
//!                 .transform(|s| format!("{s}%")),
//!         ),
//! );
//! let node = registry.to_node(&Componente {
//!     nome: "Quizzes".to_string(),
//!     peso: 20,
//! })?;
//! assert_eq!(node.to_xml(), "<componente peso=\"20%\" nome=\"QUIZZES\"/>\n");
//! # Ok(())
//! # }
//! ```

use std::any::{Any, TypeId};

use indexmap::IndexMap;
use tracing::trace;

use crate::attribute::Attribute;
use crate::error::{Error, Result};
use crate::node::Node;

/// What a child field yielded: the child node's text plus the sequence items
/// to map recursively (empty for a scalar child).
pub struct ChildValue<'a> {
    text: String,
    items: Vec<&'a dyn Any>,
}

impl<'a> ChildValue<'a> {
    /// A scalar child: text only, nothing to recurse into.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            items: Vec::new(),
        }
    }

    /// A sequence child: the field's textual form plus its elements, each of
    /// which is mapped through its own registered type mapping.
    pub fn items(text: impl Into<String>, items: Vec<&'a dyn Any>) -> Self {
        Self {
            text: text.into(),
            items,
        }
    }
}

type AttributeGetter = Box<dyn Fn(&dyn Any) -> Result<Option<String>>>;
type ChildGetter = Box<dyn for<'a> Fn(&'a dyn Any) -> Result<ChildValue<'a>>>;
type Transform = Box<dyn Fn(&str) -> String>;
type Adapter = Box<dyn Fn(&Node)>;

enum Accessor {
    Attribute(AttributeGetter),
    Child(ChildGetter),
}

/// Declarative metadata for one field of a mapped type.
pub struct FieldMapping {
    name: String,
    order: Option<i32>,
    ignore: bool,
    transform: Option<Transform>,
    accessor: Accessor,
}

impl FieldMapping {
    /// An attribute field. The getter returns `None` when the value is
    /// absent, in which case the attribute is skipped entirely; `Some` is
    /// always emitted, even for an empty string.
    pub fn attribute<T, F>(name: impl Into<String>, get: F) -> Self
    where
        T: Any,
        F: Fn(&T) -> Option<String> + 'static,
    {
        Self {
            name: name.into(),
            order: None,
            ignore: false,
            transform: None,
            accessor: Accessor::Attribute(Box::new(move |value| Ok(get(downcast::<T>(value)?)))),
        }
    }

    /// A child-entity field. The getter supplies the child node's text and,
    /// for sequence fields, the elements to map recursively.
    pub fn child<T, F>(name: impl Into<String>, get: F) -> Self
    where
        T: Any,
        F: for<'a> Fn(&'a T) -> ChildValue<'a> + 'static,
    {
        Self {
            name: name.into(),
            order: None,
            ignore: false,
            transform: None,
            accessor: Accessor::Child(Box::new(move |value| Ok(get(downcast::<T>(value)?)))),
        }
    }

    /// Sets the ordering key. Fields without a key sort after all keyed
    /// fields; ties keep declaration order.
    pub fn order(mut self, key: i32) -> Self {
        self.order = Some(key);
        self
    }

    /// Excludes the field from mapping.
    pub fn ignore(mut self) -> Self {
        self.ignore = true;
        self
    }

    /// Sets the value transformer applied to an attribute field's textual
    /// form before it is emitted.
    pub fn transform<F>(mut self, transform: F) -> Self
    where
        F: Fn(&str) -> String + 'static,
    {
        self.transform = Some(Box::new(transform));
        self
    }
}

/// Declarative metadata for a mapped type: display name, fields, and an
/// optional post-build adapter.
pub struct TypeMapping {
    name: String,
    fields: Vec<FieldMapping>,
    adapter: Option<Adapter>,
}

impl TypeMapping {
    /// Creates a mapping whose nodes are named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            adapter: None,
        }
    }

    /// Appends a field. Declaration order is the tie-break for equal or
    /// missing ordering keys.
    pub fn field(mut self, field: FieldMapping) -> Self {
        self.fields.push(field);
        self
    }

    /// Sets the post-build adapter, invoked with the finished node before it
    /// is returned. The adapter may mutate the node arbitrarily through the
    /// normal node API, including [`Node::accept`].
    pub fn adapter<F>(mut self, adapter: F) -> Self
    where
        F: Fn(&Node) + 'static,
    {
        self.adapter = Some(Box::new(adapter));
        self
    }
}

/// Registered type mappings, consulted by concrete value type at mapping
/// time. Registration order is preserved.
#[derive(Default)]
pub struct Registry {
    types: IndexMap<TypeId, TypeMapping>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the mapping for `T`.
    pub fn register<T: Any>(&mut self, mapping: TypeMapping) {
        self.types.insert(TypeId::of::<T>(), mapping);
    }

    /// Maps `value` to a node according to its registered type mapping.
    ///
    /// Fails with [`Error::MissingMapping`] when the value's type (or the
    /// type of any nested sequence element) has no registered mapping; a
    /// failure anywhere aborts the whole mapping and returns no node.
    pub fn to_node(&self, value: &dyn Any) -> Result<Node> {
        let mapping = self
            .types
            .get(&value.type_id())
            .ok_or(Error::MissingMapping)?;
        self.build(mapping, value)
    }

    fn build(&self, mapping: &TypeMapping, value: &dyn Any) -> Result<Node> {
        let node = Node::new(&mapping.name)?;
        let mut fields: Vec<&FieldMapping> =
            mapping.fields.iter().filter(|f| !f.ignore).collect();
        fields.sort_by_key(|f| (f.order.is_none(), f.order.unwrap_or(0)));

        for field in fields {
            let field_name = field.name.to_lowercase();
            match &field.accessor {
                Accessor::Attribute(get) => {
                    if let Some(raw) = get(value)? {
                        let text = match &field.transform {
                            Some(transform) => transform(&raw),
                            None => raw,
                        };
                        node.add_attribute(Attribute::new(&field_name, text)?);
                    }
                }
                Accessor::Child(get) => {
                    let child_value = get(value)?;
                    let child = Node::with_text(&field_name, child_value.text)?;
                    for item in child_value.items {
                        let mapped = self.to_node(item)?;
                        child.add_child(&mapped);
                    }
                    node.add_child(&child);
                }
            }
        }

        if let Some(adapter) = &mapping.adapter {
            adapter(&node);
        }
        trace!("mapped value into <{}>", mapping.name);
        Ok(node)
    }
}

fn downcast<T: Any>(value: &dyn Any) -> Result<&T> {
    value.downcast_ref::<T>().ok_or(Error::MappingMismatch {
        expected: std::any::type_name::<T>(),
    })
}
