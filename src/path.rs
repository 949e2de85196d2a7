//! Path query evaluation
//!
//! The query language is an ordered sequence of child-name segments joined by
//! `/` — no predicates, wildcards or attribute selectors. Resolution expands
//! level by level: each segment replaces the current frontier with the
//! matching direct children of every frontier node, in frontier order then
//! child order. This is not a recursive descendant search.

use crate::document::Document;
use crate::node::Node;

/// Resolves `expression` against the document root.
///
/// Returns the final frontier in document order; an unmatched segment yields
/// an empty result rather than an error.
pub fn query(document: &Document, expression: &str) -> Vec<Node> {
    let Some(root) = document.root() else {
        return Vec::new();
    };
    let mut frontier = vec![root];
    for segment in expression.split('/') {
        let mut next = Vec::new();
        for node in &frontier {
            for child in node.children() {
                if child.name() == segment {
                    next.push(child);
                }
            }
        }
        frontier = next;
        if frontier.is_empty() {
            break;
        }
    }
    frontier
}
