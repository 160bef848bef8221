//! Configuration options for rewriting and fetching.
//!
//! `Options` controls what the substitution engine touches; `FetchOptions`
//! bounds the upstream request made by [`crate::fetch::HttpFetcher`].

use std::time::Duration;

use crate::rule::SubstitutionRule;

/// How the `title` element is written back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TitlePolicy {
    /// Always replace the title's content with the rewritten text, even
    /// when nothing matched.
    #[default]
    Always,

    /// Only write the title back when the rule changed it, the same guard
    /// body text nodes get.
    WhenChanged,
}

/// Configuration options for the substitution engine.
///
/// # Example
///
/// ```rust
/// use fale_proxy::{Options, SubstitutionRule, TitlePolicy};
///
/// let options = Options {
///     rule: SubstitutionRule::for_token("Oxford", "Foxford")?,
///     title_policy: TitlePolicy::WhenChanged,
///     ..Options::default()
/// };
/// # Ok::<(), fale_proxy::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Substitutions applied to each eligible text node.
    ///
    /// Default: `Yale`/`yale`/`YALE` → `Fale`/`fale`/`FALE`
    pub rule: SubstitutionRule,

    /// Write-back policy for the document title.
    ///
    /// Default: `TitlePolicy::Always`
    pub title_policy: TitlePolicy,

    /// Leave text inside `script` and `style` elements alone.
    ///
    /// Default: `true`
    pub skip_raw_text: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            rule: SubstitutionRule::default(),
            title_policy: TitlePolicy::default(),
            skip_raw_text: true,
        }
    }
}

/// Limits for the upstream HTTP request.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Whole-request timeout.
    ///
    /// Default: 10 seconds
    pub timeout: Duration,

    /// `User-Agent` header sent upstream.
    ///
    /// Default: `fale-proxy/<crate version>`
    pub user_agent: String,

    /// Maximum number of body bytes read; longer bodies are truncated.
    ///
    /// Default: `Some(10 MiB)`
    pub max_body_bytes: Option<u64>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            user_agent: concat!("fale-proxy/", env!("CARGO_PKG_VERSION")).to_string(),
            max_body_bytes: Some(10 * 1024 * 1024),
        }
    }
}
