//! LeetCode (leetcode.cn) description pages.
//!
//! The description is one rich-text block with no section headings, so the
//! statement is read as text and split on its "Example N:" / "示例 N：" and
//! "Constraints:" / "提示：" markers.

use std::sync::LazyLock;

use regex::Regex;

use super::{document_title, fallback_id, missing_anchor, noise_with, texts_of, url_path, ProblemDraft};
use crate::clean::{clean_text, raw_text, DEFAULT_NOISE};
use crate::dom::{self, Document};
use crate::options::Options;
use crate::result::ExtractionResult;
use crate::router::Site;
use crate::samples::{prefer_text_split, split_examples, split_labeled_pre};
use crate::text::normalize;

/// Description container candidates, old and new layouts.
const ROOTS: &[&str] = &[
    r#"[data-track-load="description_content"]"#,
    r#"div[data-key="description-content"]"#,
    "article",
    r#"[class*="description"]"#,
];

const TITLES: &[&str] = &[r#"div[data-cy="question-title"]"#, "h1", r#"[class*="title"]"#];

const DIFFICULTIES: &[&str] = &[
    ".text-difficulty-easy",
    ".text-difficulty-medium",
    ".text-difficulty-hard",
    r#"[class*="difficulty"]"#,
    "[data-difficulty]",
];

const TAG_LINKS: &str = r#"a[href*="/tag/"]"#;

#[allow(clippy::expect_used)]
static TITLE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*[-|｜]\s*力扣.*$").expect("TITLE_SUFFIX regex"));

#[allow(clippy::expect_used)]
static TITLE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*").expect("TITLE_NUMBER regex"));

#[allow(clippy::expect_used)]
static FIRST_EXAMPLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\n(?:示例|Example)\s*\d*\s*[:：]?").expect("FIRST_EXAMPLE regex")
});

#[allow(clippy::expect_used)]
static CONSTRAINTS_TAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)(?:提示|Constraints?)\s*[:：]?\n(.*)$").expect("CONSTRAINTS_TAIL regex")
});

#[allow(clippy::expect_used)]
static SLUG_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^/problems/([^/?#]+)/?").expect("SLUG_PATH regex"));

/// Extract a LeetCode problem.
#[must_use]
pub fn extract(doc: &Document, url: &str, options: &Options) -> ExtractionResult {
    let Some(root) = dom::document_first_of(doc, ROOTS) else {
        return missing_anchor(Site::LeetCode, url, "leetcode description root not found");
    };

    let noise = noise_with(DEFAULT_NOISE, options);
    let mut draft = ProblemDraft::new(Site::LeetCode, url);

    let full_text = clean_text(Some(&root), &noise);
    draft.description = description(&full_text);
    draft.constraints.push(constraints(&full_text));
    draft.samples = prefer_text_split(split_examples(&full_text), || {
        let pres: Vec<String> = dom::select_all(&root, "pre")
            .iter()
            .map(|pre| raw_text(Some(pre)))
            .filter(|text| !text.is_empty())
            .collect();
        split_labeled_pre(&pres)
    });

    let title_node = dom::document_first_of(doc, TITLES);
    let title_raw = Some(clean_text(title_node.as_ref(), &noise))
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| document_title(doc));
    draft.title = clean_title(&title_raw);

    draft.difficulty = difficulty(doc).unwrap_or_default().to_string();
    draft.tags = tags(doc);

    let slug = SLUG_PATH
        .captures(&url_path(url))
        .map(|caps| caps[1].to_string())
        .unwrap_or_default();
    draft.id = if slug.is_empty() { fallback_id(url) } else { slug.clone() };

    draft.debug("slug", slug);
    let sample_count = draft.samples.len();
    draft.debug("sample_count", sample_count);

    draft.finish(options)
}

/// Statement text before the first example marker.
#[must_use]
pub fn description(full_text: &str) -> String {
    let head = FIRST_EXAMPLE
        .find(full_text)
        .map_or(full_text, |m| &full_text[..m.start()]);
    normalize(head)
}

/// Everything after the first `提示` / `Constraints` line.
#[must_use]
pub fn constraints(full_text: &str) -> String {
    CONSTRAINTS_TAIL
        .captures(full_text)
        .map(|caps| normalize(&caps[1]))
        .unwrap_or_default()
}

/// Drop the ` - 力扣（LeetCode）` suffix and the `1. ` number prefix.
#[must_use]
pub fn clean_title(raw: &str) -> String {
    let without_suffix = TITLE_SUFFIX.replace(raw, "");
    let stripped = TITLE_NUMBER.replace(&without_suffix, "");
    let stripped = stripped.trim();
    if stripped.is_empty() {
        raw.to_string()
    } else {
        stripped.to_string()
    }
}

/// First difficulty candidate whose text is exactly a known level.
///
/// Candidates with unrecognized text are skipped, not treated as a miss.
#[must_use]
pub fn difficulty(doc: &Document) -> Option<&'static str> {
    DIFFICULTIES.iter().find_map(|selector| {
        let node = dom::first_node(&doc.select(selector))?;
        level(&normalize(&dom::text_content(&node)))
    })
}

fn level(text: &str) -> Option<&'static str> {
    match text.to_lowercase().as_str() {
        "简单" | "easy" => Some("easy"),
        "中等" | "medium" => Some("medium"),
        "困难" | "hard" => Some("hard"),
        _ => None,
    }
}

/// Topic tag link texts, in page order without duplicates.
#[must_use]
pub fn tags(doc: &Document) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for text in texts_of(&doc.select("html"), TAG_LINKS) {
        if !text.is_empty() && !tags.contains(&text) {
            tags.push(text);
        }
    }
    tags
}
