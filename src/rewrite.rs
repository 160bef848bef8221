//! Text-node substitution engine.
//!
//! Runs in two phases over a parsed document:
//!
//! 1. Collect handles to every Text node under the body root (document
//!    order, any depth) without touching the tree.
//! 2. Apply the rule to each collected node and write back only the nodes
//!    whose content actually changed.
//!
//! The first `title` element is handled separately since it normally lives
//! in `<head>`, outside the body walk. Attribute values are never read or
//! written here; only Text node payloads are.

use tracing::debug;

use crate::dom::{self, Document};
use crate::options::{Options, TitlePolicy};
use crate::result::{RewriteResult, RewriteStats};

/// Rewrite a parsed document in place.
///
/// Absence of a body root or of a title is a no-op for that part.
pub fn rewrite_document(doc: &Document, options: &Options) -> RewriteStats {
    let mut stats = RewriteStats::default();

    if let Some(body) = dom::body(doc) {
        let nodes = dom::text_nodes(&body, options.skip_raw_text);
        stats.text_nodes_visited = nodes.len();

        for node in &nodes {
            let content = dom::text_content(node);
            let new_text = options.rule.apply(&content);
            if new_text != *content {
                dom::set_text(node, &new_text);
                stats.text_nodes_replaced += 1;
            }
        }
    }

    if let Some(title) = dom::title(doc) {
        let content = dom::text_content(&title);
        let new_title = options.rule.apply(&content);
        let write = match options.title_policy {
            TitlePolicy::Always => true,
            TitlePolicy::WhenChanged => new_title != *content,
        };
        if write {
            dom::set_text(&title, &new_title);
            stats.title_written = true;
        }
    }

    debug!(
        visited = stats.text_nodes_visited,
        replaced = stats.text_nodes_replaced,
        title_written = stats.title_written,
        "rewrote document"
    );

    stats
}

/// Parse, rewrite and serialize `html`.
///
/// Infallible: the parser repairs any string it is given.
#[must_use]
pub fn rewrite(html: &str, options: &Options) -> RewriteResult {
    let doc = dom::parse(html);
    let stats = rewrite_document(&doc, options);
    let title = dom::title(&doc).map(|t| dom::text_content(&t).to_string());

    RewriteResult {
        html: dom::serialize(&doc),
        title,
        stats,
    }
}
