//! Result types for rewrite output.

/// Counters describing one pass of the substitution engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteStats {
    /// Text nodes under the body root that were eligible for substitution.
    pub text_nodes_visited: usize,

    /// Text nodes whose content was replaced.
    pub text_nodes_replaced: usize,

    /// Whether the title element's content was written back.
    pub title_written: bool,
}

/// Output of rewriting a complete HTML document.
#[derive(Debug, Clone, Default)]
pub struct RewriteResult {
    /// The serialized, rewritten document.
    pub html: String,

    /// Rewritten text of the first `title` element, if the document has one.
    pub title: Option<String>,

    /// What the engine touched.
    pub stats: RewriteStats,
}
