//! xmlgrove - In-memory XML document model
//!
//! # Quick Start
//!
//! ```
//! use xmlgrove::{Attribute, Document, Node};
//! # fn main() -> Result<(), xmlgrove::Error> {
//! let plano = Node::new("plano")?;
//! let curso = Node::with_text("curso", "Mestrado em Engenharia Informática")?;
//! curso.add_attribute(Attribute::new("codigo", "M4310")?);
//! plano.add_child(&curso);
//!
//! let document = Document::with_root(1.0, "UTF-8", plano);
//! assert_eq!(document.query("curso").len(), 1);
//! assert!(document.to_xml().starts_with("<?xml version=\"1.0\""));
//! # Ok(())
//! # }
//! ```
//!
//! Documents are built in code, edited tree-wide through one visiting
//! traversal, queried with slash-separated child-name paths, rendered as
//! indented text, and produced from plain Rust values via registered
//! declarative mappings. Parsing XML text is out of scope.

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, Result};

pub mod name;

pub mod attribute;
pub use attribute::Attribute;

pub mod node;
pub use node::Node;

pub mod visitor;
pub use visitor::Visitor;

pub mod document;
pub use document::Document;

pub mod path;
pub use path::query;

pub mod serialize;
pub use serialize::document_to_string;

pub mod mapping;
pub use mapping::{ChildValue, FieldMapping, Registry, TypeMapping};

pub mod builder;
pub use builder::NodeBuilder;

pub mod writer;
pub use writer::write_to_path;
