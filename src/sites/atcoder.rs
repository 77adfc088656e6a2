//! AtCoder task pages.
//!
//! `#task-statement` usually holds both a Japanese and an English copy of
//! the statement under `span.lang`; only one of them is read. Sections are
//! `h3` headings, each normally wrapped in its own `<section>`, and samples
//! are numbered headings ("Sample Input 1" / "入力例 1").

use std::sync::LazyLock;

use regex::Regex;

use super::{document_title, extend_noise, fallback_id, missing_anchor, noise_with, url_path, ProblemDraft};
use crate::clean::{clean_text, raw_text, COPY_BUTTON_NOISE, DEFAULT_NOISE};
use crate::dom::{self, Document, Selection};
use crate::options::Options;
use crate::result::{ExtractionResult, Sample};
use crate::router::Site;
use crate::samples::{NumberedSamples, Side};
use crate::section::{self, HeadingPatterns};
use crate::text::normalize;

const STATEMENT: &str = "#task-statement";
const TITLE: &str = "span.h2";
const LIMITS: &str = "#main-container p";
const SECTION_HEADING: &str = "h3";

/// Sample block candidates, best first.
const SAMPLE_PRE: &[&str] = &[
    "pre.source-code-for-copy",
    r#"pre[id^="pre-sample"]"#,
    "pre",
];

#[allow(clippy::expect_used)]
static DESCRIPTION_HEADINGS: LazyLock<HeadingPatterns> = LazyLock::new(|| {
    HeadingPatterns::new(&[r"(?i)^Problem\s*Statement$", r"^問題文$"]).expect("description headings")
});

#[allow(clippy::expect_used)]
static CONSTRAINT_HEADINGS: LazyLock<HeadingPatterns> = LazyLock::new(|| {
    HeadingPatterns::new(&[r"(?i)^Constraints$", r"^制約$"]).expect("constraint headings")
});

#[allow(clippy::expect_used)]
static INPUT_HEADINGS: LazyLock<HeadingPatterns> =
    LazyLock::new(|| HeadingPatterns::new(&[r"(?i)^Input$", r"^入力$"]).expect("input headings"));

#[allow(clippy::expect_used)]
static OUTPUT_HEADINGS: LazyLock<HeadingPatterns> =
    LazyLock::new(|| HeadingPatterns::new(&[r"(?i)^Output$", r"^出力$"]).expect("output headings"));

#[allow(clippy::expect_used)]
static LIMITS_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Time\s*Limit|Memory\s*Limit|実行時間制限|メモリ制限").expect("LIMITS_LINE regex")
});

#[allow(clippy::expect_used)]
static TIME_LIMIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:Time\s*Limit|実行時間制限)\s*:\s*([^/\n]+)").expect("TIME_LIMIT regex")
});

#[allow(clippy::expect_used)]
static MEMORY_LIMIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:Memory\s*Limit|メモリ制限)\s*:\s*([^\n]+)").expect("MEMORY_LIMIT regex")
});

#[allow(clippy::expect_used)]
static SCORE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:Score\s*:|配点\s*:)").expect("SCORE_LINE regex"));

#[allow(clippy::expect_used)]
static SAMPLE_INPUT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:Sample\s*Input|入力例)\s*(\d+)").expect("SAMPLE_INPUT regex")
});

#[allow(clippy::expect_used)]
static SAMPLE_OUTPUT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:Sample\s*Output|出力例)\s*(\d+)").expect("SAMPLE_OUTPUT regex")
});

#[allow(clippy::expect_used)]
static TASK_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/contests/([^/]+)/tasks/([^/?#]+)").expect("TASK_PATH regex"));

/// Extract an AtCoder task.
#[must_use]
pub fn extract(doc: &Document, url: &str, options: &Options) -> ExtractionResult {
    let Some(statement) = dom::document_first_of(doc, &[STATEMENT]) else {
        return missing_anchor(Site::AtCoder, url, "task-statement not found");
    };

    let noise = noise_with(&extend_noise(DEFAULT_NOISE, COPY_BUTTON_NOISE), options);
    let lang_root = language_root(&statement);
    let mut draft = ProblemDraft::new(Site::AtCoder, url);

    draft.title = title(doc, &noise);

    let limits = dom::select_all(&doc.select("body"), LIMITS)
        .into_iter()
        .find(|p| LIMITS_LINE.is_match(&dom::text_content(p)))
        .map(|p| clean_text(Some(&p), &noise))
        .unwrap_or_default();
    let score = dom::first_child_with_tag(&lang_root, "p")
        .map(|p| clean_text(Some(&p), &noise))
        .filter(|text| SCORE_LINE.is_match(text))
        .unwrap_or_default();

    let read_section = |patterns: &HeadingPatterns| {
        section::extract_section(&lang_root, SECTION_HEADING, patterns, &noise)
    };
    draft.description = read_section(&DESCRIPTION_HEADINGS);
    draft.input_format = read_section(&INPUT_HEADINGS);
    draft.output_format = read_section(&OUTPUT_HEADINGS);

    draft.constraints = parse_limits(&limits);
    draft.constraints.push(score);
    draft.constraints.push(read_section(&CONSTRAINT_HEADINGS));

    draft.samples = samples(&lang_root);

    let path = url_path(url);
    let (contest_id, task_id) = TASK_PATH
        .captures(&path)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .unwrap_or_default();
    draft.id = if task_id.is_empty() {
        fallback_id(url)
    } else {
        task_id.clone()
    };

    draft.debug("contest_id", contest_id);
    draft.debug("task_id", task_id);
    let sample_count = draft.samples.len();
    draft.debug("sample_count", sample_count);
    draft.debug(
        "lang_root",
        lang_root.attr("class").map(|c| c.to_string()).unwrap_or_default(),
    );

    draft.finish(options)
}

/// Pick the statement copy to read.
///
/// Among the `span` children of a direct `span.lang` wrapper, the visible one
/// wins. When visibility does not tell them apart (none or all of them
/// visible), `.lang-en` is preferred, then `.lang-ja`, then the first span.
/// Pages without a wrapper are read as-is.
#[must_use]
pub fn language_root<'a>(statement: &Selection<'a>) -> Selection<'a> {
    let Some(wrapper) = dom::element_children(statement)
        .into_iter()
        .find(|child| dom::tag_name(child).as_deref() == Some("span") && dom::has_class(child, "lang"))
    else {
        return statement.clone();
    };

    let spans: Vec<Selection<'a>> = dom::element_children(&wrapper)
        .into_iter()
        .filter(|child| dom::tag_name(child).as_deref() == Some("span"))
        .collect();

    let visible: Vec<&Selection<'a>> = spans.iter().filter(|span| dom::is_visible(span)).collect();
    if visible.len() < spans.len() {
        if let Some(first) = visible.first() {
            return (*first).clone();
        }
    }

    spans
        .iter()
        .find(|span| dom::has_class(span, "lang-en"))
        .or_else(|| spans.iter().find(|span| dom::has_class(span, "lang-ja")))
        .or_else(|| spans.first())
        .cloned()
        .unwrap_or_else(|| statement.clone())
}

/// Limits paragraph split into `time limit: X` / `memory limit: Y`; the raw
/// text when neither parses.
#[must_use]
pub fn parse_limits(text: &str) -> Vec<String> {
    let text = normalize(text);
    if text.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    if let Some(caps) = TIME_LIMIT.captures(&text) {
        lines.push(format!("time limit: {}", normalize(&caps[1])));
    }
    if let Some(caps) = MEMORY_LIMIT.captures(&text) {
        lines.push(format!("memory limit: {}", normalize(&caps[1])));
    }
    if lines.is_empty() {
        lines.push(text);
    }
    lines
}

fn title(doc: &Document, noise: &[&str]) -> String {
    let from_heading = dom::document_first_of(doc, &[TITLE])
        .map(|node| clean_text(Some(&node), &extend_noise(noise, &["a"])))
        .unwrap_or_default();
    if from_heading.is_empty() {
        document_title(doc)
    } else {
        from_heading
    }
}

fn samples(lang_root: &Selection) -> Vec<Sample> {
    let mut numbered = NumberedSamples::new();
    for heading in dom::select_all(lang_root, SECTION_HEADING) {
        let text = section::heading_text(&heading);
        let (side, caps) = match (SAMPLE_INPUT.captures(&text), SAMPLE_OUTPUT.captures(&text)) {
            (Some(caps), _) => (Side::Input, caps),
            (None, Some(caps)) => (Side::Output, caps),
            (None, None) => continue,
        };
        let Some(index) = caps[1].parse::<u32>().ok().filter(|index| *index > 0) else {
            continue;
        };
        numbered.record(index, side, sample_text(&heading));
    }
    numbered.into_samples()
}

/// Text of the sample block a heading introduces: the best `pre` of its
/// section, of the sibling run, or of its parent, in that order.
fn sample_text(heading: &Selection) -> String {
    if let Some(section) = section::enclosing_section(heading) {
        return raw_text(best_pre(&section).as_ref());
    }

    for node in section::collect_until_next_heading(heading) {
        if dom::tag_name(&node).as_deref() == Some("pre") {
            return raw_text(Some(&node));
        }
        if let Some(pre) = best_pre(&node) {
            return raw_text(Some(&pre));
        }
    }

    let parent = dom::parent_element(heading);
    raw_text(parent.as_ref().and_then(best_pre).as_ref())
}

fn best_pre<'a>(container: &Selection<'a>) -> Option<Selection<'a>> {
    dom::select_first_of(container, SAMPLE_PRE)
}
