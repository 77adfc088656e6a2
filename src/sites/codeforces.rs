//! Codeforces problem pages (contest, gym and group).
//!
//! The statement is one `.problem-statement` block whose direct children are
//! the header (limits), the legend, the input/output specifications, the
//! sample tests and an optional note. Tags and the rating live in a sidebar
//! box outside the statement.

use std::sync::LazyLock;

use regex::Regex;

use super::{extend_noise, fallback_id, missing_anchor, noise_with, texts_of, url_path, ProblemDraft};
use crate::clean::{clean_text, raw_text, DEFAULT_NOISE};
use crate::dom::{self, Document, Selection};
use crate::options::Options;
use crate::result::ExtractionResult;
use crate::router::Site;
use crate::samples::zip_pairs;

const STATEMENT: &str = ".problem-statement";
const TITLE: &str = ".title";
const HEADER: &str = ".header";
const TIME_LIMIT: &str = ".time-limit";
const MEMORY_LIMIT: &str = ".memory-limit";
const NOTE: &str = ".note";
const INPUT_SPEC: &str = ".input-specification";
const OUTPUT_SPEC: &str = ".output-specification";
const SAMPLE_INPUTS: &str = ".sample-test .input pre, .sample-tests .input pre";
const SAMPLE_OUTPUTS: &str = ".sample-test .output pre, .sample-tests .output pre";
const SIDEBOX: &str = ".roundbox.sidebox";
const TAG_CHIP: &str = "span.tag-box";

/// Direct statement children that are not the legend.
const NON_LEGEND_CLASSES: &[&str] = &[
    "header",
    "input-specification",
    "output-specification",
    "sample-tests",
    "note",
];

/// Pseudo-tag shown to users who cannot edit tags.
const NO_TAG_EDIT_ACCESS: &str = "no tag edit access";

#[allow(clippy::expect_used)]
static TITLE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z][0-9A-Z]?\.|[A-Z]\))\s*").expect("TITLE_PREFIX regex"));

#[allow(clippy::expect_used)]
static RATING_CHIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*(\d+)$").expect("RATING_CHIP regex"));

#[allow(clippy::expect_used)]
static TAGS_BOX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Problem tags").expect("TAGS_BOX regex"));

#[allow(clippy::expect_used)]
static CONTEST_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/(?:contest|gym)/(\d+)/problem/([A-Za-z0-9_]+)").expect("CONTEST_PATH regex")
});

#[allow(clippy::expect_used)]
static GROUP_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/group/[^/]+/(?:contest|gym)/(\d+)/problem/([A-Za-z0-9_]+)")
        .expect("GROUP_PATH regex")
});

/// Extract a Codeforces problem.
#[must_use]
pub fn extract(doc: &Document, url: &str, options: &Options) -> ExtractionResult {
    let Some(statement) = dom::document_first_of(doc, &[STATEMENT]) else {
        return missing_anchor(Site::Codeforces, url, "problem-statement not found");
    };

    let noise = noise_with(DEFAULT_NOISE, options);
    let without_property_title = extend_noise(&noise, &[".property-title"]);
    let without_section_title = extend_noise(&noise, &[".section-title"]);
    let mut draft = ProblemDraft::new(Site::Codeforces, url);

    let title_raw = clean_text(dom::select_first_of(&statement, &[TITLE]).as_ref(), &noise);
    draft.title = strip_title_prefix(&title_raw);

    let header = dom::select_first_of(&statement, &[HEADER]);
    let limit = |selector: &str| {
        let node = header
            .as_ref()
            .and_then(|header| dom::select_first_of(header, &[selector]));
        clean_text(node.as_ref(), &without_property_title)
    };
    let time_limit = limit(TIME_LIMIT);
    let memory_limit = limit(MEMORY_LIMIT);

    let legend = legend_block(&statement);
    let description = clean_text(legend.as_ref(), &noise);
    let note = clean_text(
        dom::select_first_of(&statement, &[NOTE]).as_ref(),
        &without_section_title,
    );
    draft.description = match (description.is_empty(), note.is_empty()) {
        (_, true) => description,
        (true, false) => format!("Note\n{note}"),
        (false, false) => format!("{description}\n\nNote\n{note}"),
    };

    draft.input_format = clean_text(
        dom::select_first_of(&statement, &[INPUT_SPEC]).as_ref(),
        &without_section_title,
    );
    draft.output_format = clean_text(
        dom::select_first_of(&statement, &[OUTPUT_SPEC]).as_ref(),
        &without_section_title,
    );

    let inputs = pre_texts(&statement, SAMPLE_INPUTS);
    let outputs = pre_texts(&statement, SAMPLE_OUTPUTS);
    draft.debug("sample_input_count", inputs.len());
    draft.debug("sample_output_count", outputs.len());
    draft.samples = zip_pairs(inputs, outputs);

    let (tags, rating) = sidebar_tags(doc);
    draft.tags = tags;
    draft.difficulty = rating.unwrap_or_default();

    if !time_limit.is_empty() {
        draft.constraints.push(format!("time limit per test: {time_limit}"));
    }
    if !memory_limit.is_empty() {
        draft.constraints.push(format!("memory limit per test: {memory_limit}"));
    }
    if !draft.difficulty.is_empty() {
        draft.constraints.push(format!("rating {}", draft.difficulty));
    }

    draft.id = problem_id(url);
    draft.debug("source_path", url_path(url));

    draft.finish(options)
}

/// Strip the `A.` / `B1.` / `C)` index prefix; keeps the raw title when
/// nothing else is left.
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

/// `{contest}{index}` for contest, gym and group URLs, else the slugified path.
#[must_use]
pub fn problem_id(url: &str) -> String {
    let path = url_path(url);
    CONTEST_PATH
        .captures(&path)
        .or_else(|| GROUP_PATH.captures(&path))
        .map_or_else(|| fallback_id(url), |caps| format!("{}{}", &caps[1], &caps[2]))
}

/// Split sidebar chips into tags and the `*NNNN` rating.
///
/// The rating chip is not a tag, and the "no tag edit access" placeholder is
/// dropped.
#[must_use]
pub fn sidebar_tags(doc: &Document) -> (Vec<String>, Option<String>) {
    let Some(tag_box) = dom::select_all(&doc.select("body"), SIDEBOX)
        .into_iter()
        .find(|sidebox| TAGS_BOX.is_match(&dom::text_content(sidebox)))
    else {
        return (Vec::new(), None);
    };

    let mut tags = Vec::new();
    let mut rating = None;
    for chip in texts_of(&tag_box, TAG_CHIP) {
        if let Some(caps) = RATING_CHIP.captures(&chip) {
            rating = Some(caps[1].to_string());
            continue;
        }
        if chip.eq_ignore_ascii_case(NO_TAG_EDIT_ACCESS) {
            continue;
        }
        tags.push(chip);
    }
    (tags, rating)
}

/// First direct `div` child of the statement that is not a known section.
fn legend_block<'a>(statement: &Selection<'a>) -> Option<Selection<'a>> {
    dom::element_children(statement).into_iter().find(|child| {
        dom::tag_name(child).as_deref() == Some("div")
            && !NON_LEGEND_CLASSES.iter().any(|class| dom::has_class(child, class))
    })
}

fn pre_texts(statement: &Selection, selector: &str) -> Vec<String> {
    dom::select_all(statement, selector)
        .iter()
        .map(|pre| raw_text(Some(pre)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://codeforces.com/contest/1500/problem/A";

    fn page(statement: &str, sidebar: &str) -> Document {
        dom::parse(&format!(
            r#"<html><body><div id="sidebar">{sidebar}</div><div class="problemindexholder">{statement}</div></body></html>"#
        ))
    }

    const STATEMENT_HTML: &str = r#"
<div class="problem-statement">
  <div class="header">
    <div class="title">A. Sum of Two</div>
    <div class="time-limit"><div class="property-title">time limit per test</div>2 seconds</div>
    <div class="memory-limit"><div class="property-title">memory limit per test</div>256 megabytes</div>
  </div>
  <div><p>Given <span class="MathJax_Preview">preview</span>a and b.</p></div>
  <div class="input-specification"><div class="section-title">Input</div><p>Two integers.</p></div>
  <div class="output-specification"><div class="section-title">Output</div><p>Their sum.</p></div>
  <div class="sample-tests">
    <div class="section-title">Examples</div>
    <div class="sample-test">
      <div class="input"><div class="title">Input</div><pre><div class="test-example-line">1</div><div class="test-example-line">2</div></pre></div>
      <div class="output"><div class="title">Output</div><pre>3
</pre></div>
      <div class="input"><div class="title">Input</div><pre>5<br>5</pre></div>
      <div class="output"><div class="title">Output</div><pre>10</pre></div>
    </div>
  </div>
  <div class="note"><div class="section-title">Note</div><p>Easy.</p></div>
</div>"#;

    const SIDEBAR_HTML: &str = r#"
<div class="roundbox sidebox"><div class="caption">Contest materials</div></div>
<div class="roundbox sidebox">
  <div class="caption">→ Problem tags</div>
  <span class="tag-box">math</span>
  <span class="tag-box">No tag edit access</span>
  <span class="tag-box">*800</span>
  <span class="tag-box">implementation</span>
</div>"#;

    #[test]
    fn missing_statement_is_failure() {
        let doc = dom::parse("<div class='problem'>nothing</div>");
        let result = extract(&doc, URL, &Options::default());
        assert!(!result.is_ok());
        assert_eq!(result.reason(), Some("problem-statement not found"));
    }

    #[test]
    fn full_statement() {
        let doc = page(STATEMENT_HTML, SIDEBAR_HTML);
        let result = extract(&doc, URL, &Options::default());
        let problem = result.problem().cloned().expect("success");

        assert_eq!(problem.id, "1500A");
        assert_eq!(problem.title, "Sum of Two");
        assert_eq!(problem.input_format, "Two integers.");
        assert_eq!(problem.output_format, "Their sum.");
        assert_eq!(problem.tags, vec!["math", "implementation"]);
        assert_eq!(problem.difficulty, "800");
        assert_eq!(
            problem.constraints,
            "time limit per test: 2 seconds\nmemory limit per test: 256 megabytes\nrating 800"
        );
        assert!(problem.content.starts_with("Given a and b.\n\nNote\nEasy."));

        let samples = result.samples();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].input, "1\n2");
        assert_eq!(samples[0].output, "3");
        assert_eq!(samples[1].input, "5\n5");
        assert_eq!(samples[1].index, 2);
    }

    #[test]
    fn no_sidebar_means_unknown_difficulty() {
        let doc = page(STATEMENT_HTML, "");
        let result = extract(&doc, URL, &Options::default());
        let problem = result.problem().cloned().expect("success");
        assert!(problem.tags.is_empty());
        assert_eq!(problem.difficulty, "unknown");
        assert!(!problem.constraints.contains("rating"));
    }

    #[test]
    fn title_prefixes() {
        assert_eq!(strip_title_prefix("A. Two Sum"), "Two Sum");
        assert_eq!(strip_title_prefix("B1. Easy Version"), "Easy Version");
        assert_eq!(strip_title_prefix("C) Bracket"), "Bracket");
        assert_eq!(strip_title_prefix("Plain"), "Plain");
        assert_eq!(strip_title_prefix("A."), "A.");
    }

    #[test]
    fn ids_from_urls() {
        assert_eq!(problem_id(URL), "1500A");
        assert_eq!(problem_id("https://codeforces.com/gym/104000/problem/B1"), "104000B1");
        assert_eq!(problem_id("https://codeforces.com/group/abc/contest/1500/problem/A"), "1500A");
        assert_eq!(problem_id("https://codeforces.com/problemset/problem/1/A"), "problemset_problem_1_A");
    }

    #[test]
    fn source_path_in_debug() {
        let doc = page(STATEMENT_HTML, "");
        let result = extract(&doc, "https://codeforces.com/contest/1500/problem/A?locale=en", &Options::default());
        let path = result.debug().and_then(|d| d.get("source_path")).cloned();
        assert_eq!(path, Some(serde_json::Value::from("/contest/1500/problem/A")));
    }
}
