//! Per-site problem extractors.
//!
//! Each judge gets one module exposing a single pure function,
//! `extract(doc, url, options) -> ExtractionResult`. Selectors and heading
//! vocabularies are named constants at the top of each module so a markup
//! change on one site is a one-line edit there.
//!
//! # Module Structure
//!
//! - `codeforces`: contest, gym and group problems
//! - `atcoder`: task pages, bilingual statement selection
//! - `leetcode`: leetcode.cn description pages
//! - `luogu`: problem pages
//! - `nowcoder_acm`: ac.nowcoder.com problem and contest pages
//! - `nowcoder_practice`: www.nowcoder.com practice pages
//!
//! Shared pieces live here: [`ProblemDraft`] collects the fields and applies
//! the caller's [`Options`] defaults, and a few URL/document helpers.

pub mod atcoder;
pub mod codeforces;
pub mod leetcode;
pub mod luogu;
pub mod nowcoder_acm;
pub mod nowcoder_practice;

use serde_json::{Map, Value};
use tracing::debug;
use url::Url;

use crate::dom::{self, Document, Selection};
use crate::options::Options;
use crate::result::{ExtractionResult, ProblemRecord, Sample};
use crate::router::Site;
use crate::samples::{finalize, render_content};
use crate::text::{join_nonempty, normalize, slugify_path};

/// Run the extractor registered for `site`.
#[must_use]
pub fn extract(site: Site, doc: &Document, url: &str, options: &Options) -> ExtractionResult {
    match site {
        Site::Codeforces => codeforces::extract(doc, url, options),
        Site::AtCoder => atcoder::extract(doc, url, options),
        Site::LeetCode => leetcode::extract(doc, url, options),
        Site::Luogu => luogu::extract(doc, url, options),
        Site::NowcoderAcm => nowcoder_acm::extract(doc, url, options),
        Site::NowcoderPractice => nowcoder_practice::extract(doc, url, options),
    }
}

// =============================================================================
// Record assembly
// =============================================================================

/// Mutable record under construction.
///
/// Extractors fill whatever the page offers and leave the rest empty;
/// [`ProblemDraft::finish`] turns empty title/difficulty into the configured
/// placeholders and serializes samples into `content`.
#[derive(Debug)]
pub(crate) struct ProblemDraft {
    site: Site,
    url: String,
    pub id: String,
    pub title: String,
    pub description: String,
    pub input_format: String,
    pub output_format: String,
    /// Constraint lines in display order; empty entries are dropped.
    pub constraints: Vec<String>,
    pub tags: Vec<String>,
    pub difficulty: String,
    pub samples: Vec<Sample>,
    debug: Map<String, Value>,
}

impl ProblemDraft {
    pub(crate) fn new(site: Site, url: &str) -> Self {
        Self {
            site,
            url: url.to_string(),
            id: String::new(),
            title: String::new(),
            description: String::new(),
            input_format: String::new(),
            output_format: String::new(),
            constraints: Vec::new(),
            tags: Vec::new(),
            difficulty: String::new(),
            samples: Vec::new(),
            debug: Map::new(),
        }
    }

    /// Record a diagnostic value under `key`.
    pub(crate) fn debug(&mut self, key: &str, value: impl Into<Value>) {
        self.debug.insert(key.to_string(), value.into());
    }

    pub(crate) fn finish(self, options: &Options) -> ExtractionResult {
        let samples = finalize(self.samples);
        let content = render_content(&self.description, &samples, options.inline_samples);

        let title = if self.title.is_empty() {
            options.untitled.clone()
        } else {
            self.title
        };
        let difficulty = if self.difficulty.is_empty() {
            options.unknown_difficulty.clone()
        } else {
            self.difficulty
        };

        debug!(
            site = self.site.name(),
            id = %self.id,
            samples = samples.len(),
            tags = self.tags.len(),
            "problem extracted"
        );

        let problem = ProblemRecord {
            source: self.site.source(),
            id: self.id,
            title,
            url: self.url.clone(),
            content,
            input_format: self.input_format,
            output_format: self.output_format,
            constraints: join_nonempty(&self.constraints, "\n"),
            tags: self.tags,
            difficulty,
            status: options.status.clone(),
            my_ac_code: String::new(),
            my_ac_language: String::new(),
        };

        ExtractionResult::Success {
            url: self.url,
            problem,
            samples,
            debug: self.debug,
        }
    }
}

/// Failure for a page whose statement container is absent.
pub(crate) fn missing_anchor(site: Site, url: &str, reason: &str) -> ExtractionResult {
    debug!(site = site.name(), url, reason, "statement anchor missing");
    ExtractionResult::failure(site.source(), url, reason)
}

// =============================================================================
// Shared helpers
// =============================================================================

/// Base noise plus the caller's extra selectors.
pub(crate) fn noise_with<'a>(base: &[&'a str], options: &'a Options) -> Vec<&'a str> {
    base.iter()
        .copied()
        .chain(options.extra_noise())
        .collect()
}

/// `noise` with additional site-local selectors appended.
pub(crate) fn extend_noise<'a>(noise: &[&'a str], more: &[&'a str]) -> Vec<&'a str> {
    noise.iter().chain(more.iter()).copied().collect()
}

/// Path component of `url`; the raw string when it does not parse.
#[must_use]
pub fn url_path(url: &str) -> String {
    Url::parse(url).map_or_else(|_| url.to_string(), |parsed| parsed.path().to_string())
}

/// Last-resort id: the URL path with `/` replaced by `_`.
#[must_use]
pub fn fallback_id(url: &str) -> String {
    slugify_path(&url_path(url))
}

/// Normalized `<title>` of the document.
pub(crate) fn document_title(doc: &Document) -> String {
    dom::first_node(&doc.select("title"))
        .map(|title| normalize(&dom::text_content(&title)))
        .unwrap_or_default()
}

/// Normalized `textContent` of every match of `selector` below `root`.
pub(crate) fn texts_of(root: &Selection, selector: &str) -> Vec<String> {
    dom::select_all(root, selector)
        .iter()
        .map(|node| normalize(&dom::text_content(node)))
        .collect()
}
