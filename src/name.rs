//! Name validity rule shared by nodes and attributes

use crate::error::{Error, Result};

/// Returns true if `name` matches `[A-Za-z_:][A-Za-z0-9._:-]*`.
pub fn is_valid(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == ':' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | ':' | '-'))
}

/// Checks `name` against the validity rule, failing with [`Error::InvalidName`].
pub fn validate(name: &str) -> Result<()> {
    if is_valid(name) {
        Ok(())
    } else {
        Err(Error::InvalidName {
            name: name.to_string(),
        })
    }
}
