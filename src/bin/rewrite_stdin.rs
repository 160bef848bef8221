//! Reads HTML from stdin and writes the rewritten document to stdout.

use fale_proxy::rewrite_html;
use std::io::{self, Read, Write};

fn main() {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let mut html = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut html) {
        tracing::error!(error = %e, "failed to read from stdin");
        std::process::exit(1);
    }

    match rewrite_html(&html) {
        Ok(out) => {
            if let Err(e) = io::stdout().write_all(out.as_bytes()) {
                tracing::error!(error = %e, "failed to write to stdout");
                std::process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "rewrite failed");
            std::process::exit(1);
        }
    }
}
