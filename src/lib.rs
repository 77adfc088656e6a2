//! # judge-scrape
//!
//! Problem statement extraction for competitive-programming judge pages.
//!
//! Given the HTML of a problem page and its URL, this library produces one
//! normalized [`ProblemRecord`]: title, statement, input/output format,
//! constraints, sample tests, tags and difficulty. Six judges are supported:
//! Codeforces, AtCoder, LeetCode (leetcode.cn), Luogu, Nowcoder ACM and
//! Nowcoder practice.
//!
//! ## Quick Start
//!
//! ```rust
//! use judge_scrape::scrape_html;
//!
//! let html = r#"<div class="problem-statement">
//!   <div class="header"><div class="title">A. Sample</div></div>
//!   <div><p>Print the sum.</p></div>
//! </div>"#;
//!
//! let result = scrape_html(html, "https://codeforces.com/contest/1/problem/A")?;
//! let problem = result.problem().expect("statement present");
//! assert_eq!(problem.title, "Sample");
//! assert_eq!(problem.id, "1A");
//! # Ok::<(), judge_scrape::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! - **Routing**: [`router::resolve`] maps the URL to a [`Site`]
//! - **Extraction**: the site's extractor in [`sites`] reads the document
//! - **Cleaning**: every fragment is rendered by [`clean`] without math
//!   residue, copy buttons or scripts, then normalized by [`text`]
//! - **Samples**: [`samples`] reconciles the judge's sample markup into
//!   ordered input/output pairs
//!
//! A page whose statement container is missing yields
//! [`ExtractionResult::Failure`], not an error; only an unsupported URL is an
//! [`Error`].

mod error;
mod options;
mod patterns;
mod result;

/// DOM helpers over `dom_query`: navigation, cloning, `innerText` rendering.
pub mod dom;

/// Whitespace normalization shared by every extracted string.
pub mod text;

/// Noise removal and text rendering of DOM subtrees.
pub mod clean;

/// Heading-based section lookup.
pub mod section;

/// Sample input/output pairing strategies.
pub mod samples;

/// URL to site routing.
pub mod router;

/// Per-site extractors.
pub mod sites;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use dom::Document;
pub use error::{Error, Result};
pub use options::Options;
pub use result::{ExtractionResult, ProblemRecord, Sample, Source};
pub use router::Site;

/// Extract the problem on `doc`, routing by `url`.
///
/// Returns `Err(Error::UnsupportedPage)` when no extractor matches the URL.
/// A matching extractor always returns a value, which may itself be
/// [`ExtractionResult::Failure`] when the page lacks its statement.
pub fn scrape(doc: &Document, url: &str, options: &Options) -> Result<ExtractionResult> {
    let site = router::require(url)?;
    Ok(extract_with_site(site, doc, url, options))
}

/// Parse `html` and extract with default options.
///
/// # Example
///
/// ```rust
/// use judge_scrape::{scrape_html, Error};
///
/// let err = scrape_html("<p>hi</p>", "https://example.com/").unwrap_err();
/// assert!(matches!(err, Error::UnsupportedPage(_)));
/// ```
pub fn scrape_html(html: &str, url: &str) -> Result<ExtractionResult> {
    scrape_html_with_options(html, url, &Options::default())
}

/// Parse `html` and extract with custom options.
///
/// # Example
///
/// ```rust
/// use judge_scrape::{scrape_html_with_options, Options};
///
/// let html = r#"<div class="ta-question question-module"></div>"#;
/// let options = Options {
///     status: "attempted".to_string(),
///     ..Options::default()
/// };
/// let result = scrape_html_with_options(html, "https://www.nowcoder.com/practice/abc123", &options)?;
/// assert_eq!(result.problem().map(|p| p.status.as_str()), Some("attempted"));
/// # Ok::<(), judge_scrape::Error>(())
/// ```
pub fn scrape_html_with_options(html: &str, url: &str, options: &Options) -> Result<ExtractionResult> {
    let site = router::require(url)?;
    let doc = dom::parse(html);
    Ok(extract_with_site(site, &doc, url, options))
}

/// Decode raw page bytes (BOM or `<meta charset>`, else UTF-8) and extract.
///
/// # Example
///
/// ```rust
/// use judge_scrape::scrape_bytes;
///
/// let html = b"<html><head><meta charset=\"gbk\"></head><body><div class=\"problem-card\"><h1>P1001 A+B</h1></div></body></html>";
/// let result = scrape_bytes(html, "https://www.luogu.com.cn/problem/P1001")?;
/// assert_eq!(result.problem().map(|p| p.title.as_str()), Some("A+B"));
/// # Ok::<(), judge_scrape::Error>(())
/// ```
pub fn scrape_bytes(html: &[u8], url: &str) -> Result<ExtractionResult> {
    scrape_bytes_with_options(html, url, &Options::default())
}

/// [`scrape_bytes`] with custom options.
pub fn scrape_bytes_with_options(html: &[u8], url: &str, options: &Options) -> Result<ExtractionResult> {
    let html = encoding::transcode_to_utf8(html);
    scrape_html_with_options(&html, url, options)
}

/// Run a specific site's extractor, skipping URL routing.
#[must_use]
pub fn extract_with_site(site: Site, doc: &Document, url: &str, options: &Options) -> ExtractionResult {
    sites::extract(site, doc, url, options)
}
