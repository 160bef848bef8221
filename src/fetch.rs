//! Upstream page retrieval.
//!
//! The service only depends on the [`Fetch`] trait, so tests can serve
//! canned pages without a network. [`HttpFetcher`] is the real
//! implementation: a blocking `reqwest` client bounded by [`FetchOptions`].

use std::io::Read;

use tracing::{debug, warn};
use url::Url;

use crate::encoding;
use crate::error::{Error, Result};
use crate::options::FetchOptions;

/// A retrieved upstream document.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects.
    pub url: Url,

    /// HTTP status of the final response.
    pub status: u16,

    /// `Content-Type` header, if the server sent one.
    pub content_type: Option<String>,

    /// Body decoded to UTF-8.
    pub body: String,
}

/// Source of upstream documents.
pub trait Fetch {
    /// Retrieve `url`. Non-success statuses are errors.
    fn fetch(&self, url: &Url) -> Result<FetchedPage>;
}

/// Parse a request URL, accepting only absolute `http`/`https` URLs.
pub fn parse_target(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::InvalidUrl(format!(
            "{raw}: unsupported scheme {}",
            url.scheme()
        )));
    }
    if url.host_str().is_none() {
        return Err(Error::InvalidUrl(format!("{raw}: missing host")));
    }
    Ok(url)
}

/// Blocking HTTP fetcher.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
    max_body_bytes: Option<u64>,
}

impl HttpFetcher {
    /// Build a client with the given timeout, user agent and size cap.
    pub fn new(options: &FetchOptions) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(options.timeout)
            .user_agent(options.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            max_body_bytes: options.max_body_bytes,
        })
    }
}

impl Fetch for HttpFetcher {
    #[tracing::instrument(skip_all, fields(url = %url))]
    fn fetch(&self, url: &Url) -> Result<FetchedPage> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| {
                warn!(error = %e, "upstream request failed");
                Error::from(e)
            })?;

        let status = response.status().as_u16();
        let final_url = response.url().clone();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let mut bytes = Vec::new();
        let read = match self.max_body_bytes {
            Some(limit) => response.take(limit).read_to_end(&mut bytes),
            None => {
                let mut response = response;
                response.read_to_end(&mut bytes)
            }
        };
        read.map_err(|e| Error::FetchError(format!("reading body: {e}")))?;

        debug!(bytes = bytes.len(), "read upstream body");

        Ok(FetchedPage {
            url: final_url,
            status,
            body: encoding::decode_body(&bytes, content_type.as_deref()),
            content_type,
        })
    }
}
