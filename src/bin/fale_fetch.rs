//! Fetches a page, rewrites it and prints the proxy's JSON response.
//!
//! Usage: `fale_fetch <url>`, or pipe a `{"url": "..."}` request on stdin.
//! Exits 0 on a 200 response and with the HTTP status class otherwise
//! (4 for 4xx, 5 for 5xx).

use fale_proxy::service::{self, ProxyRequest};
use fale_proxy::fetch::HttpFetcher;
use fale_proxy::{FetchOptions, Options};
use std::env;
use std::io::{self, Read};

fn main() {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let fetcher = match HttpFetcher::new(&FetchOptions::default()) {
        Ok(f) => f,
        Err(e) => {
            tracing::error!(error = %e, "could not build HTTP client");
            std::process::exit(1);
        }
    };
    let options = Options::default();

    let response = if let Some(url) = env::args().nth(1) {
        let request = ProxyRequest { url: Some(url) };
        service::handle_request(&request, &fetcher, &options)
    } else {
        let mut body = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut body) {
            tracing::error!(error = %e, "failed to read from stdin");
            std::process::exit(1);
        }
        service::handle_json(&body, &fetcher, &options)
    };

    println!("{}", response.to_json());

    if !response.is_success() {
        std::process::exit(i32::from(response.status / 100));
    }
}
