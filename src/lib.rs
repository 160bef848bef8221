//! # fale-proxy
//!
//! Fetches an HTML page and returns a copy in which every `Yale`, `yale` and
//! `YALE` appearing in visible text reads `Fale`, `fale` and `FALE`.
//! Markup, attribute values (URLs included), comments and script/style
//! bodies are left alone.
//!
//! ## Quick Start
//!
//! ```rust
//! use fale_proxy::rewrite_html;
//!
//! let html = r#"<html><head><title>Yale</title></head>
//! <body><a href="https://www.yale.edu/about">About Yale</a></body></html>"#;
//!
//! let out = rewrite_html(html)?;
//! assert!(out.contains("<title>Fale</title>"));
//! assert!(out.contains(r#"<a href="https://www.yale.edu/about">About Fale</a>"#));
//! # Ok::<(), fale_proxy::Error>(())
//! ```
//!
//! ## Layers
//!
//! - [`dom`]: parse and serialize (html5ever via `dom_query`)
//! - [`rewrite`]: the text-node substitution engine
//! - [`fetch`] and [`service`]: retrieving the page and the JSON request/response contract

mod error;
mod options;
mod result;
mod rule;

/// Document parsing, serialization and node classification.
pub mod dom;

/// Text-node substitution engine.
pub mod rewrite;

/// Character encoding detection for fetched pages.
pub mod encoding;

/// Upstream page retrieval.
pub mod fetch;

/// Proxy request handling.
pub mod service;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::{FetchOptions, Options, TitlePolicy};
pub use result::{RewriteResult, RewriteStats};
pub use rewrite::rewrite_document;
pub use rule::SubstitutionRule;

/// Rewrites an HTML document with the default `Yale`→`Fale` rule.
///
/// Parsing a `&str` never fails; malformed markup is repaired the way a
/// browser would repair it.
///
/// # Example
///
/// ```rust
/// use fale_proxy::rewrite_html;
///
/// let out = rewrite_html(r#"<div class="yale-section"><h2>About Yale</h2></div>"#)?;
/// assert!(out.contains(r#"<div class="yale-section"><h2>About Fale</h2></div>"#));
/// # Ok::<(), fale_proxy::Error>(())
/// ```
pub fn rewrite_html(html: &str) -> Result<String> {
    rewrite_html_with_options(html, &Options::default()).map(|r| r.html)
}

/// Rewrites an HTML document with custom options.
///
/// Returns the serialized document together with the rewritten title and
/// a count of what was touched. Never fails; the `Result` matches
/// [`rewrite_bytes`], whose input may not decode.
///
/// # Example
///
/// ```rust
/// use fale_proxy::{rewrite_html_with_options, Options, TitlePolicy};
///
/// let options = Options {
///     title_policy: TitlePolicy::WhenChanged,
///     ..Options::default()
/// };
/// let result = rewrite_html_with_options("<title>YALE</title><p>yale</p>", &options)?;
/// assert_eq!(result.title.as_deref(), Some("FALE"));
/// assert_eq!(result.stats.text_nodes_replaced, 1);
/// # Ok::<(), fale_proxy::Error>(())
/// ```
pub fn rewrite_html_with_options(html: &str, options: &Options) -> Result<RewriteResult> {
    Ok(rewrite::rewrite(html, options))
}

/// Rewrites an HTML document given as UTF-8 bytes.
///
/// Bytes that are not valid UTF-8 fail with [`Error::ParseError`]; use
/// [`encoding::decode_body`] first for pages in other charsets.
pub fn rewrite_bytes(html: &[u8]) -> Result<String> {
    let doc = dom::parse_bytes(html)?;
    rewrite_document(&doc, &Options::default());
    Ok(dom::serialize(&doc))
}
