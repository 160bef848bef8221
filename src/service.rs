//! Request handling for the fetch-and-rewrite proxy.
//!
//! Transport-agnostic: a request is `{"url": "..."}`, a response is an HTTP
//! status plus a JSON body. Whatever serves HTTP only has to move bytes.
//!
//! | Outcome | Status | Body |
//! |---|---|---|
//! | rewritten page | 200 | `{"success": true, "title": ..., "content": ...}` |
//! | no `url` | 400 | `{"success": false, "error": "URL is required"}` |
//! | malformed body | 400 | `{"success": false, "error": "Invalid request body: ..."}` |
//! | bad URL / fetch failure | 500 | `{"success": false, "error": "Failed to fetch content: ..."}` |

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::fetch::{self, Fetch};
use crate::options::Options;
use crate::result::RewriteResult;
use crate::rewrite;

/// Incoming proxy request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyRequest {
    /// Page to fetch and rewrite.
    #[serde(default)]
    pub url: Option<String>,
}

/// JSON body of a proxy response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseBody {
    /// The page was fetched and rewritten.
    Success {
        /// Always `true`.
        success: bool,
        /// Rewritten title text, empty when the page has no `title`.
        title: String,
        /// The rewritten document, serialized.
        content: String,
    },

    /// The request was rejected or the page could not be fetched.
    Failure {
        /// Always `false`.
        success: bool,
        /// Human-readable reason.
        error: String,
    },
}

/// Status code plus body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyResponse {
    /// HTTP status: 200, 400 or 500.
    pub status: u16,

    /// JSON body sent with the status.
    pub body: ResponseBody,
}

impl ProxyResponse {
    fn success(result: RewriteResult) -> Self {
        Self {
            status: 200,
            body: ResponseBody::Success {
                success: true,
                title: result.title.unwrap_or_default(),
                content: result.html,
            },
        }
    }

    fn failure(err: &Error) -> Self {
        let error = match err {
            Error::MissingUrl | Error::InvalidRequest(_) => err.to_string(),
            _ => format!("Failed to fetch content: {err}"),
        };
        Self {
            status: err.status_code(),
            body: ResponseBody::Failure {
                success: false,
                error,
            },
        }
    }

    /// True for a 200 response.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    /// Serialize the body to JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.body).unwrap_or_default()
    }
}

fn proxy<F: Fetch + ?Sized>(
    request: &ProxyRequest,
    fetcher: &F,
    options: &Options,
) -> Result<RewriteResult> {
    let raw = request
        .url
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or(Error::MissingUrl)?;

    let url = fetch::parse_target(raw)?;
    let page = fetcher.fetch(&url)?;
    debug!(
        final_url = %page.url,
        status = page.status,
        content_type = page.content_type.as_deref().unwrap_or_default(),
        "fetched upstream page"
    );
    Ok(rewrite::rewrite(&page.body, options))
}

/// Fetch the requested page and rewrite it.
pub fn handle_request<F: Fetch + ?Sized>(
    request: &ProxyRequest,
    fetcher: &F,
    options: &Options,
) -> ProxyResponse {
    match proxy(request, fetcher, options) {
        Ok(result) => {
            info!(
                url = request.url.as_deref().unwrap_or_default(),
                replaced = result.stats.text_nodes_replaced,
                "proxied page"
            );
            ProxyResponse::success(result)
        }
        Err(err) => {
            warn!(error = %err, "proxy request failed");
            ProxyResponse::failure(&err)
        }
    }
}

/// Decode a JSON request body and handle it.
pub fn handle_json<F: Fetch + ?Sized>(body: &str, fetcher: &F, options: &Options) -> ProxyResponse {
    match serde_json::from_str::<ProxyRequest>(body) {
        Ok(request) => handle_request(&request, fetcher, options),
        Err(e) => {
            let err = Error::InvalidRequest(e.to_string());
            warn!(error = %err, "rejected request body");
            ProxyResponse::failure(&err)
        }
    }
}
