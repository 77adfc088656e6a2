//! Luogu problem pages.
//!
//! Statements are a flat run of headings of varying level (`h2` on the
//! current layout, `h3` on older ones) followed by content. Limits come from
//! the stat bar as label/value pairs.

use std::sync::LazyLock;

use regex::Regex;

use super::{document_title, fallback_id, missing_anchor, noise_with, url_path, ProblemDraft};
use crate::clean::{clean_text, raw_text, DEFAULT_NOISE};
use crate::dom::{self, Document, Selection};
use crate::options::Options;
use crate::result::{ExtractionResult, Sample};
use crate::router::Site;
use crate::samples::pair_sequential;
use crate::section::{self, HeadingPatterns};

/// Problem container candidates. The page body is deliberately absent: a page
/// without any of these is not a rendered problem.
const ROOTS: &[&str] = &[".problem-card", ".problem-content", "#article", ".problem-body"];

const TITLES: &[&str] = &[".problem-card h1", ".problem-title", "h1"];

const HEADINGS: &str = "h1, h2, h3, h4, h5, h6";
const STAT_LABEL: &str = ".stat-text.name";

const TIME_LIMIT_LABEL: &str = "时间限制";
const MEMORY_LIMIT_LABEL: &str = "内存限制";

#[allow(clippy::expect_used)]
static DESCRIPTION_HEADINGS: LazyLock<HeadingPatterns> = LazyLock::new(|| {
    HeadingPatterns::new(&["题目描述", "(?i)Description"]).expect("description headings")
});

#[allow(clippy::expect_used)]
static INPUT_HEADINGS: LazyLock<HeadingPatterns> =
    LazyLock::new(|| HeadingPatterns::new(&["输入格式", "(?i)Input"]).expect("input headings"));

#[allow(clippy::expect_used)]
static OUTPUT_HEADINGS: LazyLock<HeadingPatterns> =
    LazyLock::new(|| HeadingPatterns::new(&["输出格式", "(?i)Output"]).expect("output headings"));

#[allow(clippy::expect_used)]
static HINT_HEADINGS: LazyLock<HeadingPatterns> = LazyLock::new(|| {
    HeadingPatterns::new(&["说明/提示", "说明", "提示", "(?i)Notes?", "(?i)Constraints?"])
        .expect("hint headings")
});

#[allow(clippy::expect_used)]
static SAMPLE_HEADINGS: LazyLock<HeadingPatterns> = LazyLock::new(|| {
    HeadingPatterns::new(&["输入输出样例", "(?i)Sample"]).expect("sample headings")
});

#[allow(clippy::expect_used)]
static TITLE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^P\d+\s*").expect("TITLE_PREFIX regex"));

#[allow(clippy::expect_used)]
static PROBLEM_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/problem/([A-Za-z0-9]+)").expect("PROBLEM_PATH regex"));

/// Extract a Luogu problem.
#[must_use]
pub fn extract(doc: &Document, url: &str, options: &Options) -> ExtractionResult {
    let Some(root) = dom::document_first_of(doc, ROOTS) else {
        return missing_anchor(Site::Luogu, url, "luogu problem container not found");
    };

    let noise = noise_with(DEFAULT_NOISE, options);
    let mut draft = ProblemDraft::new(Site::Luogu, url);

    let title_node = dom::document_first_of(doc, TITLES);
    let title_raw = Some(clean_text(title_node.as_ref(), &noise))
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| document_title(doc));
    draft.title = strip_title_prefix(&title_raw);

    let read_section = |patterns: &HeadingPatterns| {
        section::find_heading(&root, HEADINGS, patterns)
            .map(|heading| section::sibling_text(&heading, &noise))
            .unwrap_or_default()
    };
    draft.description = read_section(&DESCRIPTION_HEADINGS);
    draft.input_format = read_section(&INPUT_HEADINGS);
    draft.output_format = read_section(&OUTPUT_HEADINGS);

    draft.constraints = vec![
        stat(doc, TIME_LIMIT_LABEL, &noise),
        stat(doc, MEMORY_LIMIT_LABEL, &noise),
        read_section(&HINT_HEADINGS),
    ];

    draft.samples = samples(&root);

    draft.id = PROBLEM_PATH
        .captures(&url_path(url))
        .map_or_else(|| fallback_id(url), |caps| caps[1].to_string());

    draft.debug("source_path", url_path(url));
    let sample_count = draft.samples.len();
    draft.debug("sample_count", sample_count);

    draft.finish(options)
}

/// Drop the `P1001` id prefix from a title.
#[must_use]
pub fn strip_title_prefix(title: &str) -> String {
    let stripped = TITLE_PREFIX.replace(title, "");
    let stripped = stripped.trim();
    if stripped.is_empty() {
        title.to_string()
    } else {
        stripped.to_string()
    }
}

/// `label: value` for the stat-bar entry whose label text is exactly `label`.
fn stat(doc: &Document, label: &str, noise: &[&str]) -> String {
    let value = dom::select_all(&doc.select("body"), STAT_LABEL)
        .into_iter()
        .find(|node| clean_text(Some(node), noise) == label)
        .and_then(|node| dom::next_element_sibling(&node))
        .map(|value| clean_text(Some(&value), noise))
        .unwrap_or_default();
    if value.is_empty() {
        String::new()
    } else {
        format!("{label}: {value}")
    }
}

/// Non-empty `pre` blocks after the sample heading, paired in order. The
/// blocks may be the siblings themselves or nested in wrapper `div`s.
fn samples(root: &Selection) -> Vec<Sample> {
    let Some(heading) = section::find_heading(root, HEADINGS, &SAMPLE_HEADINGS) else {
        return Vec::new();
    };
    let blocks: Vec<String> = section::collect_until_next_heading(&heading)
        .iter()
        .flat_map(|node| {
            if dom::tag_name(node).as_deref() == Some("pre") {
                vec![node.clone()]
            } else {
                dom::select_all(node, "pre")
            }
        })
        .map(|pre| raw_text(Some(&pre)))
        .filter(|text| !text.is_empty())
        .collect();
    pair_sequential(blocks)
}
