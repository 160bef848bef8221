//! Document Parser/Serializer
//!
//! Thin adapter over the `dom_query` crate (html5ever underneath). Parsing is
//! permissive: missing `<html>`, `<head>` and `<body>` wrappers are created
//! the way browsers create them. Serialization emits html5ever's normalized
//! markup, so an untouched tree round-trips to equivalent (not byte-identical)
//! HTML.

use crate::error::{Error, Result};

// Re-export core types for external use
pub use dom_query::{Document, NodeRef};
pub use tendril::StrTendril;

/// Elements whose text children are raw text rather than visible prose.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Closed classification of tree nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Element with a tag name, attributes and children.
    Element,
    /// Text payload, no children.
    Text,
    /// `<!-- ... -->`
    Comment,
    /// Document, doctype, processing instruction, fragment.
    Other,
}

/// Classify a node.
#[must_use]
pub fn kind(node: &NodeRef) -> NodeKind {
    if node.is_element() {
        NodeKind::Element
    } else if node.is_text() {
        NodeKind::Text
    } else if node.is_comment() {
        NodeKind::Comment
    } else {
        NodeKind::Other
    }
}

// === Parsing / Serialization ===

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Parse HTML from raw bytes, which must be valid UTF-8.
pub fn parse_bytes(html: &[u8]) -> Result<Document> {
    std::str::from_utf8(html)
        .map(parse)
        .map_err(|e| Error::ParseError(e.to_string()))
}

/// Serialize the whole document, doctype included.
#[must_use]
pub fn serialize(doc: &Document) -> String {
    doc.html().to_string()
}

// === Lookup ===

/// The body root, if the parser produced one (framesets have none).
#[must_use]
pub fn body(doc: &Document) -> Option<NodeRef<'_>> {
    doc.select("body").nodes().first().copied()
}

/// The first `title` element in document order, wherever it sits.
#[must_use]
pub fn title(doc: &Document) -> Option<NodeRef<'_>> {
    doc.select("title").nodes().first().copied()
}

/// True if the node's parent is a `script` or `style` element.
#[must_use]
pub fn in_raw_text_element(node: &NodeRef) -> bool {
    node.parent()
        .and_then(|parent| parent.node_name())
        .is_some_and(|name| {
            RAW_TEXT_ELEMENTS
                .iter()
                .any(|raw| name.eq_ignore_ascii_case(raw))
        })
}

// === Text nodes ===

/// Collect every Text node below `root`, in document order.
///
/// Pure traversal: nothing is mutated, so the returned handles can be
/// rewritten afterwards without affecting which nodes were found.
#[must_use]
pub fn text_nodes<'a>(root: &NodeRef<'a>, skip_raw_text: bool) -> Vec<NodeRef<'a>> {
    let mut out = Vec::new();
    for node in root.descendants() {
        match kind(&node) {
            NodeKind::Text => {
                if skip_raw_text && in_raw_text_element(&node) {
                    continue;
                }
                out.push(node);
            }
            NodeKind::Element | NodeKind::Comment | NodeKind::Other => {}
        }
    }
    out
}

/// Concatenated text of a node and its descendants.
#[inline]
#[must_use]
pub fn text_content(node: &NodeRef) -> StrTendril {
    node.text()
}

/// Replace a node's content with `text`.
///
/// On a Text node this swaps the payload; on an element it replaces all
/// children with a single Text node.
#[inline]
pub fn set_text(node: &NodeRef, text: &str) {
    node.set_text(text);
}
