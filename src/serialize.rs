//! Canonical XML text rendering
//!
//! Output is byte-for-byte stable over a given tree state: two spaces of
//! indentation per nesting level, attributes joined by single spaces in list
//! order, self-closing only for childless nodes that have attributes and no
//! text. Text is emitted verbatim; escaping is out of scope.

use crate::document::Document;
use crate::node::Node;

/// Renders the document header followed by the root subtree. A document
/// without a root renders as the header alone.
pub fn document_to_string(document: &Document) -> String {
    let mut out = format!(
        "<?xml version=\"{}\" encoding=\"{}\"?>\n",
        version_string(document.version()),
        document.encoding()
    );
    if let Some(root) = document.root() {
        render_node(&root, 0, &mut out);
    }
    out
}

pub(crate) fn render_node(node: &Node, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    let name = node.name();
    let attributes = node
        .attributes()
        .iter()
        .map(|a| format!("{}=\"{}\"", a.name(), a.value()))
        .collect::<Vec<_>>()
        .join(" ");
    let children = node.children();
    // blank text counts as absent
    let text = node.text();
    let text = if text.trim().is_empty() { String::new() } else { text };

    if children.is_empty() {
        if attributes.is_empty() {
            out.push_str(&format!("{indent}<{name}>{text}</{name}>\n"));
        } else if text.is_empty() {
            out.push_str(&format!("{indent}<{name} {attributes}/>\n"));
        } else {
            out.push_str(&format!("{indent}<{name} {attributes}>{text}</{name}>\n"));
        }
        return;
    }

    if attributes.is_empty() {
        out.push_str(&format!("{indent}<{name}>\n"));
    } else {
        out.push_str(&format!("{indent}<{name} {attributes}>\n"));
    }
    for child in &children {
        render_node(child, depth + 1, out);
    }
    out.push_str(&format!("{indent}</{name}>\n"));
}

// "1.0" rather than "1" for whole-number versions
fn version_string(version: f64) -> String {
    if version.fract() == 0.0 {
        format!("{version:.1}")
    } else {
        version.to_string()
    }
}
