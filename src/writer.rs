//! File-writing collaborator
//!
//! The only I/O in the crate. The core model produces text; this module hands
//! it to the filesystem.

use std::path::Path;

use tracing::{debug, instrument};

use crate::document::Document;
use crate::error::Result;

/// Renders `document` and writes it to `path`, replacing any existing file.
#[instrument(skip(document))]
pub fn write_to_path(document: &Document, path: &Path) -> Result<()> {
    let text = document.to_xml();
    debug!("writing {} bytes", text.len());
    std::fs::write(path, text)?;
    Ok(())
}
