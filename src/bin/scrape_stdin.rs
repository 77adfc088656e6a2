//! Reads a saved problem page from stdin and prints the extraction result as
//! JSON to stdout.
//!
//! Usage: `scrape_stdin <url> < page.html`
//!
//! Exit codes: 0 when an extractor ran (even if it reported a failure),
//! 1 on I/O or serialization errors, 2 when no extractor matches the URL.
//! Set `RUST_LOG=judge_scrape=debug` for extractor diagnostics on stderr.

use std::io::{self, Read};
use std::process::ExitCode;

use judge_scrape::{scrape_bytes, Error};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();

    let Some(url) = std::env::args().nth(1) else {
        eprintln!("usage: scrape_stdin <url> < page.html");
        return ExitCode::from(2);
    };

    let mut html = Vec::new();
    if let Err(err) = io::stdin().read_to_end(&mut html) {
        eprintln!("failed to read from stdin: {err}");
        return ExitCode::from(1);
    }

    let result = match scrape_bytes(&html, &url) {
        Ok(result) => result,
        Err(err @ Error::UnsupportedPage(_)) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(1);
        }
    };

    match result.to_json() {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(1)
        }
    }
}
