//! Case-preserving substitution rule.
//!
//! A rule is an ordered list of literal `(pattern, replacement)` pairs.
//! Applying it scans the text once, left to right, and replaces every
//! non-overlapping occurrence of any pattern. Where two patterns match at
//! the same position the earlier pair wins. Replacement text is never
//! rescanned, so one pair cannot rewrite another pair's output. Matching is
//! case-sensitive and purely substring-based: `"Yalestuff"` becomes
//! `"Falestuff"`.

use std::borrow::Cow;

use regex::{Captures, Regex};

use crate::error::{Error, Result};

/// Ordered literal substitutions applied to text node content.
#[derive(Debug, Clone)]
pub struct SubstitutionRule {
    pairs: Vec<(String, String)>,
    matcher: Regex,
}

impl SubstitutionRule {
    /// Build a rule from explicit pairs, kept in the given order.
    ///
    /// Empty patterns are rejected: they would match between every character.
    pub fn new<P, R>(pairs: impl IntoIterator<Item = (P, R)>) -> Result<Self>
    where
        P: Into<String>,
        R: Into<String>,
    {
        let pairs: Vec<(String, String)> = pairs
            .into_iter()
            .map(|(p, r)| (p.into(), r.into()))
            .collect();

        if pairs.is_empty() {
            return Err(Error::InvalidRule("rule has no pairs".to_string()));
        }
        if let Some((_, replacement)) = pairs.iter().find(|(p, _)| p.is_empty()) {
            return Err(Error::InvalidRule(format!(
                "empty pattern (replacement {replacement:?})"
            )));
        }

        let alternation = pairs
            .iter()
            .map(|(p, _)| regex::escape(p))
            .collect::<Vec<_>>()
            .join("|");
        let matcher = Regex::new(&alternation).map_err(|e| Error::InvalidRule(e.to_string()))?;

        Ok(Self { pairs, matcher })
    }

    /// Derive the three casing variants of one token.
    ///
    /// Produces, in order: the token as given, its lowercase form and its
    /// uppercase form, each mapped to the matching form of `replacement`.
    /// Variants that coincide (e.g. an already-lowercase token) appear once.
    ///
    /// ```rust
    /// use fale_proxy::SubstitutionRule;
    ///
    /// let rule = SubstitutionRule::for_token("Yale", "Fale")?;
    /// assert_eq!(rule.apply("YALE and yale"), "FALE and fale");
    /// # Ok::<(), fale_proxy::Error>(())
    /// ```
    pub fn for_token(token: &str, replacement: &str) -> Result<Self> {
        let variants = [
            (token.to_string(), replacement.to_string()),
            (token.to_lowercase(), replacement.to_lowercase()),
            (token.to_uppercase(), replacement.to_uppercase()),
        ];

        let mut pairs: Vec<(String, String)> = Vec::with_capacity(variants.len());
        for (pattern, repl) in variants {
            if !pairs.iter().any(|(p, _)| *p == pattern) {
                pairs.push((pattern, repl));
            }
        }

        Self::new(pairs)
    }

    /// The pairs in priority order.
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    fn replacement_for<'a>(&'a self, matched: &'a str) -> &'a str {
        self.pairs
            .iter()
            .find(|(p, _)| p == matched)
            .map_or(matched, |(_, r)| r.as_str())
    }

    /// Replace every pattern occurrence in `text` in a single pass.
    ///
    /// Returns `Cow::Borrowed` when no pattern occurs, so callers can skip
    /// writing back unchanged content without comparing strings.
    #[must_use]
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.matcher
            .replace_all(text, |caps: &Captures| self.replacement_for(&caps[0]).to_string())
    }
}

impl PartialEq for SubstitutionRule {
    fn eq(&self, other: &Self) -> bool {
        self.pairs == other.pairs
    }
}

impl Eq for SubstitutionRule {}

impl Default for SubstitutionRule {
    /// `Yale`→`Fale`, `yale`→`fale`, `YALE`→`FALE`.
    #[allow(clippy::expect_used)]
    fn default() -> Self {
        Self::for_token("Yale", "Fale").expect("valid default rule")
    }
}
