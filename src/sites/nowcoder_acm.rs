//! Nowcoder ACM problem pages (ac.nowcoder.com).
//!
//! Problem and contest pages share one layout: `.terminal-topic` holds an
//! info strip (`.question-intr`) and the statement (`.subject-describe`).
//! Paywalled or logged-out pages omit the statement entirely.

use std::sync::LazyLock;

use regex::Regex;

use super::{document_title, fallback_id, missing_anchor, noise_with, url_path, ProblemDraft};
use crate::clean::{clean_text, raw_text, DEFAULT_NOISE};
use crate::dom::{self, Document, Selection};
use crate::options::Options;
use crate::patterns::DIFFICULTY_WORD;
use crate::result::{ExtractionResult, Sample};
use crate::router::Site;
use crate::samples::number_blocks;
use crate::text::normalize;

const STATEMENT: &str = ".terminal-topic .subject-describe";
const TITLES: &[&str] = &[".question-title", ".terminal-topic-title"];
const QUESTION: &str = ".subject-question";
const INFO: &str = ".terminal-topic .question-intr .subject-item-wrap";
const INFO_SPANS: &str = ".terminal-topic .question-intr span";
const SAMPLE_BLOCKS: &str = ".subject-describe .question-oi";

const SAMPLE_INPUT: &[&str] = &[
    r#"textarea[data-clipboard-text-id^="input"]"#,
    ".question-oi-mod:nth-child(1) pre",
];
const SAMPLE_OUTPUT: &[&str] = &[
    r#"textarea[data-clipboard-text-id^="output"]"#,
    ".question-oi-mod:nth-child(2) pre",
];

const ID_PREFIX: &str = "题号：";
const TIME_PREFIX: &str = "时间限制：";
const MEMORY_PREFIX: &str = "空间限制：";
const IO_FORMAT_PREFIX: &str = "64bit IO Format:";

#[allow(clippy::expect_used)]
static INPUT_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)输入描述|Input\s*desc").expect("INPUT_HEADING regex"));

#[allow(clippy::expect_used)]
static OUTPUT_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)输出描述|Output\s*desc").expect("OUTPUT_HEADING regex"));

#[allow(clippy::expect_used)]
static DIFFICULTY_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)难度|Difficulty").expect("DIFFICULTY_LABEL regex"));

#[allow(clippy::expect_used)]
static PROBLEM_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/acm/problem/(\d+)").expect("PROBLEM_PATH regex"));

#[allow(clippy::expect_used)]
static CONTEST_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/acm/contest/(\d+)/([A-Za-z0-9_]+)").expect("CONTEST_PATH regex")
});

/// Lines of the info strip, picked by prefix.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QuestionInfo {
    pub id_text: String,
    pub time_limit: String,
    pub memory_limit: String,
    pub io_format: String,
}

/// Extract a Nowcoder ACM problem.
#[must_use]
pub fn extract(doc: &Document, url: &str, options: &Options) -> ExtractionResult {
    let Some(root) = dom::document_first_of(doc, &[STATEMENT]) else {
        return missing_anchor(
            Site::NowcoderAcm,
            url,
            "subject-describe not found (maybe paywalled or not logged in)",
        );
    };

    let noise = noise_with(DEFAULT_NOISE, options);
    let mut draft = ProblemDraft::new(Site::NowcoderAcm, url);

    draft.title = dom::document_first_of(doc, TITLES)
        .map(|node| clean_text(Some(&node), &noise))
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| document_title(doc));
    draft.description = clean_text(dom::select_first_of(&root, &[QUESTION]).as_ref(), &noise);
    draft.input_format = format_block(&root, &INPUT_HEADING, &noise);
    draft.output_format = format_block(&root, &OUTPUT_HEADING, &noise);

    let info = question_info(doc);
    draft.constraints = vec![
        info.time_limit.clone(),
        info.memory_limit.clone(),
        info.io_format.clone(),
    ];
    draft.difficulty = difficulty(doc);
    draft.samples = samples(doc);

    let pid = problem_id(url);
    draft.id = if pid.is_empty() {
        Some(info.id_text.trim_start_matches(ID_PREFIX).trim().to_string())
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| fallback_id(url))
    } else {
        format!("NC{pid}")
    };

    let sample_count = draft.samples.len();
    draft.debug("sample_count", sample_count);
    draft.debug("pid", pid);

    draft.finish(options)
}

/// `{n}` for `/acm/problem/{n}`, `{c}_{x}` for `/acm/contest/{c}/{x}`, else
/// empty.
#[must_use]
pub fn problem_id(url: &str) -> String {
    let path = url_path(url);
    if let Some(caps) = PROBLEM_PATH.captures(&path) {
        return caps[1].to_string();
    }
    CONTEST_PATH
        .captures(&path)
        .map(|caps| format!("{}_{}", &caps[1], &caps[2]))
        .unwrap_or_default()
}

/// Prefixed lines of the info strip.
#[must_use]
pub fn question_info(doc: &Document) -> QuestionInfo {
    let Some(strip) = dom::document_first_of(doc, &[INFO]) else {
        return QuestionInfo::default();
    };
    let text = normalize(&dom::inner_text(&strip));
    let lines: Vec<&str> = text.lines().map(str::trim).filter(|line| !line.is_empty()).collect();
    let find = |prefix: &str| {
        lines
            .iter()
            .find(|line| line.starts_with(prefix))
            .map(|line| (*line).to_string())
            .unwrap_or_default()
    };
    QuestionInfo {
        id_text: find(ID_PREFIX),
        time_limit: find(TIME_PREFIX),
        memory_limit: find(MEMORY_PREFIX),
        io_format: find(IO_FORMAT_PREFIX),
    }
}

/// Difficulty from the info strip spans.
///
/// A span labelled `难度`/`Difficulty` wins and is kept verbatim minus the
/// label (star ratings included); otherwise the first span holding a
/// difficulty word. Empty when neither is present.
#[must_use]
pub fn difficulty(doc: &Document) -> String {
    let spans: Vec<String> = dom::select_all(&doc.select("body"), INFO_SPANS)
        .iter()
        .map(|span| normalize(&dom::text_content(span)))
        .filter(|text| !text.is_empty())
        .collect();

    if let Some(labelled) = spans.iter().find(|text| DIFFICULTY_LABEL.is_match(text)) {
        let value = DIFFICULTY_LABEL
            .replace(labelled, "")
            .trim_start_matches([':', '：', ' '])
            .trim()
            .to_string();
        if !value.is_empty() {
            return value;
        }
    }
    spans
        .iter()
        .find(|text| DIFFICULTY_WORD.is_match(text))
        .cloned()
        .unwrap_or_default()
}

/// Cleaned element right after the top-level `h2` whose text matches.
fn format_block(root: &Selection, heading: &Regex, noise: &[&str]) -> String {
    dom::element_children(root)
        .into_iter()
        .find(|child| {
            dom::tag_name(child).as_deref() == Some("h2")
                && heading.is_match(&clean_text(Some(child), noise))
        })
        .and_then(|h2| dom::next_element_sibling(&h2))
        .map(|block| clean_text(Some(&block), noise))
        .unwrap_or_default()
}

fn samples(doc: &Document) -> Vec<Sample> {
    let blocks = dom::select_all(&doc.select("body"), SAMPLE_BLOCKS)
        .iter()
        .map(|block| (side_text(block, SAMPLE_INPUT), side_text(block, SAMPLE_OUTPUT)))
        .collect();
    number_blocks(blocks)
}

/// Sample text from a `textarea` (its raw content) or a `pre`.
fn side_text(block: &Selection, selectors: &[&str]) -> String {
    let Some(node) = dom::select_first_of(block, selectors) else {
        return String::new();
    };
    if dom::tag_name(&node).as_deref() == Some("textarea") {
        normalize(&dom::text_content(&node))
    } else {
        raw_text(Some(&node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://ac.nowcoder.com/acm/problem/14516";

    const PAGE: &str = r#"
<html><head><title>Sum - 牛客竞赛</title></head><body>
<div class="terminal-topic">
  <div class="terminal-topic-title">Sum</div>
  <div class="question-intr">
    <div class="subject-item-wrap">
      <span>题号：NC14516</span><br>
      <span>时间限制：C/C++ 1秒，其他语言2秒</span><br>
      <span>空间限制：C/C++ 262144K，其他语言524288K</span><br>
      <span>64bit IO Format: %lld</span>
    </div>
    <div class="difficulty-row"><span>难度：★★★</span></div>
  </div>
  <div class="subject-describe">
    <div class="subject-question"><p>Add two numbers <span class="katex-mathml">a</span>a and b.</p></div>
    <h2>输入描述:</h2>
    <pre>Two integers.</pre>
    <h2>输出描述:</h2>
    <pre>One integer.</pre>
    <div class="question-oi">
      <div class="question-oi-hd">示例1</div>
      <div class="question-oi-bd">
        <div class="question-oi-mod"><h2>输入</h2><textarea data-clipboard-text-id="input1">1 2
</textarea><pre>1 2</pre></div>
        <div class="question-oi-mod"><h2>输出</h2><textarea data-clipboard-text-id="output1">3</textarea></div>
      </div>
    </div>
    <div class="question-oi"><div class="question-oi-bd"></div></div>
    <div class="question-oi">
      <div class="question-oi-bd">
        <div class="question-oi-mod"><h2>输入</h2><pre>5 5</pre></div>
        <div class="question-oi-mod"><h2>输出</h2><pre>10</pre></div>
      </div>
    </div>
  </div>
</div>
</body></html>"#;

    #[test]
    fn missing_statement_is_failure() {
        let result = extract(&dom::parse("<div class='terminal-topic'></div>"), URL, &Options::default());
        assert_eq!(result.reason(), Some("subject-describe not found (maybe paywalled or not logged in)"));
    }

    #[test]
    fn full_problem() {
        let doc = dom::parse(PAGE);
        let result = extract(&doc, URL, &Options::default());
        let problem = result.problem().cloned().expect("success");

        assert_eq!(problem.id, "NC14516");
        assert_eq!(problem.title, "Sum");
        assert!(problem.content.starts_with("Add two numbers a and b."));
        assert_eq!(problem.input_format, "Two integers.");
        assert_eq!(problem.output_format, "One integer.");
        assert_eq!(
            problem.constraints,
            "时间限制：C/C++ 1秒，其他语言2秒\n空间限制：C/C++ 262144K，其他语言524288K\n64bit IO Format: %lld"
        );
        assert_eq!(problem.difficulty, "★★★");
        assert_eq!(
            result.samples(),
            &[Sample::new(1, "1 2", "3"), Sample::new(2, "5 5", "10")]
        );
    }

    #[test]
    fn ids_from_paths() {
        assert_eq!(problem_id(URL), "14516");
        assert_eq!(problem_id("https://ac.nowcoder.com/acm/contest/5678/C"), "5678_C");
        assert_eq!(problem_id("https://ac.nowcoder.com/acm/other"), "");
    }

    #[test]
    fn contest_page_id_and_word_difficulty() {
        let doc = dom::parse(
            r#"<div class="terminal-topic"><div class="question-intr"><span>中等</span></div><div class="subject-describe"></div></div>"#,
        );
        let result = extract(&doc, "https://ac.nowcoder.com/acm/contest/5678/C", &Options::default());
        let problem = result.problem().cloned().expect("success");
        assert_eq!(problem.id, "NC5678_C");
        assert_eq!(problem.difficulty, "中等");
        assert_eq!(problem.title, "Untitled");
    }

    #[test]
    fn info_strip_prefixes() {
        let info = question_info(&dom::parse(PAGE));
        assert_eq!(info.id_text, "题号：NC14516");
        assert!(info.time_limit.starts_with("时间限制："));
    }
}
