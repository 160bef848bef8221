//! Error types for fale-proxy.
//!
//! Rewriting an already decoded string cannot fail; errors come from
//! undecodable input, bad rule configuration, and the fetch/service layer.

/// Error type for rewrite and proxy operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input could not be interpreted as HTML text.
    #[error("HTML parsing failed: {0}")]
    ParseError(String),

    /// A substitution rule was built with an unusable pattern.
    #[error("Invalid substitution rule: {0}")]
    InvalidRule(String),

    /// The request did not carry a target URL.
    #[error("URL is required")]
    MissingUrl,

    /// The request body was not a JSON object of the expected shape.
    #[error("Invalid request body: {0}")]
    InvalidRequest(String),

    /// The target URL could not be parsed or uses an unsupported scheme.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The upstream document could not be retrieved.
    #[error("Fetch failed: {0}")]
    FetchError(String),
}

impl Error {
    /// HTTP status the proxy reports for this error.
    ///
    /// Caller mistakes (no URL, malformed body) are `400`; everything that
    /// goes wrong while fetching or processing the page is `500`.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingUrl | Self::InvalidRequest(_) => 400,
            Self::ParseError(_) | Self::InvalidRule(_) | Self::InvalidUrl(_) | Self::FetchError(_) => {
                500
            }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::FetchError(err.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}

/// Result type alias for fale-proxy operations.
pub type Result<T> = std::result::Result<T, Error>;
