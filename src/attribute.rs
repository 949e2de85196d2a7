//! Attribute name/value pairs

use crate::error::Result;
use crate::name;

/// A validated name/value pair held by a node.
///
/// Attributes are plain values: they carry no back-reference to the node
/// holding them, and a node's attribute list may contain several attributes
/// with the same name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    name: String,
    value: String,
}

impl Attribute {
    /// Creates an attribute, validating the name.
    pub fn new(name: &str, value: impl Into<String>) -> Result<Self> {
        name::validate(name)?;
        Ok(Self {
            name: name.to_string(),
            value: value.into(),
        })
    }

    /// Returns the attribute name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the attribute value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Renames the attribute, re-validating the new name.
    ///
    /// On failure the current name is kept.
    pub fn set_name(&mut self, name: &str) -> Result<()> {
        name::validate(name)?;
        self.name = name.to_string();
        Ok(())
    }

    /// Replaces the attribute value.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    // Rename with a name the caller has already validated.
    pub(crate) fn overwrite_name(&mut self, name: &str) {
        self.name = name.to_string();
    }
}
