//! Decoding fetched page bytes to UTF-8.
//!
//! Upstream pages arrive as bytes in whatever charset the server chose. The
//! charset is taken from, in order: a byte order mark, the `Content-Type`
//! response header, a `<meta>` declaration near the top of the document.
//! Anything else is treated as UTF-8. Decoding is lossy.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Bytes of the document scanned for a `<meta>` charset declaration.
const META_SCAN_LIMIT: usize = 1024;

/// `charset=` parameter inside a header value or `content` attribute.
#[allow(clippy::expect_used)]
static CHARSET_PARAM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;>]+)"#).expect("valid regex")
});

/// `<meta charset="...">` or `<meta http-equiv=... content="...; charset=...">`
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s;>]+)"#).expect("valid regex")
});

/// Charset label from a `Content-Type` header value.
fn header_charset(content_type: &str) -> Option<&str> {
    CHARSET_PARAM_RE
        .captures(content_type)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Charset label declared by a `<meta>` tag in the document head.
fn meta_charset(html: &[u8]) -> Option<String> {
    let head = String::from_utf8_lossy(&html[..html.len().min(META_SCAN_LIMIT)]);
    META_CHARSET_RE
        .captures(&head)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Pick the encoding for a response body.
#[must_use]
pub fn detect_encoding(html: &[u8], content_type: Option<&str>) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(html) {
        return encoding;
    }

    let from_header = content_type
        .and_then(header_charset)
        .and_then(|label| Encoding::for_label(label.as_bytes()));
    if let Some(encoding) = from_header {
        return encoding;
    }

    meta_charset(html)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode a response body to a UTF-8 string.
///
/// Invalid sequences become U+FFFD rather than errors; a BOM is stripped.
///
/// # Examples
///
/// ```
/// use fale_proxy::encoding::decode_body;
///
/// let html = b"<p>Caf\xE9</p>";
/// assert_eq!(decode_body(html, Some("text/html; charset=ISO-8859-1")), "<p>Café</p>");
/// ```
#[must_use]
pub fn decode_body(html: &[u8], content_type: Option<&str>) -> String {
    let encoding = detect_encoding(html, content_type);
    let (decoded, _encoding_used, _had_errors) = encoding.decode(html);
    decoded.into_owned()
}
