//! taproot CLI
//!
//! Analyzes the HTML document at a URL and prints exactly one line:
//! the text content of the most deeply nested element, `malformed HTML`
//! when the tag structure is invalid, or `URL connection error` when the
//! document cannot be retrieved.

use clap::Parser;
use taproot_common::HttpSource;
use taproot_html::analyze;

/// Find the most deeply nested text in an HTML document.
#[derive(Parser)]
#[command(name = "taproot", version, about)]
struct Args {
    /// URL of the HTML document to analyze
    url: String,
}

fn main() {
    let args = Args::parse();
    let source = HttpSource::new();

    println!("{}", analyze(&source, &args.url));
}
