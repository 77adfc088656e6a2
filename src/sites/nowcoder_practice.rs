//! Nowcoder practice pages (www.nowcoder.com/practice).

use std::sync::LazyLock;

use regex::Regex;

use super::{document_title, fallback_id, missing_anchor, noise_with, url_path, ProblemDraft};
use crate::clean::{clean_text, raw_text, DEFAULT_NOISE};
use crate::dom::{self, Document, Selection};
use crate::options::Options;
use crate::patterns::DIFFICULTY_WORD;
use crate::result::{ExtractionResult, Sample};
use crate::router::Site;
use crate::samples::{classify_label, number_blocks, Side};
use crate::text::normalize;

const ROOT: &str = ".ta-question.question-module";
const TITLES: &[&str] = &[".ta-question .question-title .hide-txt", ".ta-question .question-title"];
const DESCRIPTION: &str = ".ta-question .content-wrapper .describe-table";
const SUB_TITLES: &str = ".ta-question .content-wrapper .section-sub-title";
const INFO_SPANS: &str = ".ta-question .content-wrapper .flex-row.flex-none .flex-auto.fs-xs span";
const SAMPLE_BOXES: &str = ".ta-question .content-wrapper .section-box";
const SAMPLE_ITEMS: &str = ".question-sample .sample-item";

/// Info-strip entries copied into `constraints`, in order.
const CONSTRAINT_MARKERS: &[&str] = &["时间限制", "空间限制", "通过率"];

#[allow(clippy::expect_used)]
static TITLE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2,}\d+\s+").expect("TITLE_PREFIX regex"));

#[allow(clippy::expect_used)]
static INPUT_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"输入描述").expect("INPUT_TITLE regex"));

#[allow(clippy::expect_used)]
static OUTPUT_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"输出描述").expect("OUTPUT_TITLE regex"));

#[allow(clippy::expect_used)]
static EXAMPLE_BOX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)示例|Example").expect("EXAMPLE_BOX regex"));

#[allow(clippy::expect_used)]
static PRACTICE_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/practice/([0-9a-fA-F]+)").expect("PRACTICE_PATH regex"));

/// Extract a Nowcoder practice problem.
#[must_use]
pub fn extract(doc: &Document, url: &str, options: &Options) -> ExtractionResult {
    if dom::document_first_of(doc, &[ROOT]).is_none() {
        return missing_anchor(Site::NowcoderPractice, url, "ta-question root not found");
    }

    let noise = noise_with(DEFAULT_NOISE, options);
    let body = doc.select("body");
    let mut draft = ProblemDraft::new(Site::NowcoderPractice, url);

    let title_raw = TITLES
        .iter()
        .filter_map(|selector| dom::document_first_of(doc, &[*selector]))
        .map(|node| clean_text(Some(&node), &noise))
        .find(|text| !text.is_empty())
        .unwrap_or_else(|| document_title(doc));
    draft.title = strip_title_prefix(&title_raw);

    draft.description = clean_text(dom::document_first_of(doc, &[DESCRIPTION]).as_ref(), &noise);

    let sub_titles = dom::select_all(&body, SUB_TITLES);
    let format_after = |pattern: &Regex| {
        sub_titles
            .iter()
            .find(|title| pattern.is_match(&clean_text(Some(title), &noise)))
            .and_then(dom::next_element_sibling)
            .map(|block| clean_text(Some(&block), &noise))
            .unwrap_or_default()
    };
    draft.input_format = format_after(&INPUT_TITLE);
    draft.output_format = format_after(&OUTPUT_TITLE);

    let spans: Vec<String> = dom::select_all(&body, INFO_SPANS)
        .iter()
        .map(|span| normalize(&dom::text_content(span)))
        .filter(|text| !text.is_empty())
        .collect();
    draft.difficulty = spans
        .iter()
        .find(|text| DIFFICULTY_WORD.is_match(text))
        .cloned()
        .unwrap_or_default();
    draft.constraints = CONSTRAINT_MARKERS
        .iter()
        .filter_map(|marker| spans.iter().find(|text| text.contains(marker)).cloned())
        .collect();

    draft.samples = samples(&body, &noise);

    let pid = PRACTICE_PATH
        .captures(&url_path(url))
        .map(|caps| caps[1].to_string())
        .unwrap_or_default();
    draft.id = if pid.is_empty() {
        fallback_id(url)
    } else {
        format!("P{pid}")
    };

    let sample_count = draft.samples.len();
    draft.debug("sample_count", sample_count);
    draft.debug("pid", pid);

    draft.finish(options)
}

/// Drop a leading `NC15 `-style catalogue code.
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

/// One sample per example box; each item's `span` label says which side its
/// `pre` holds.
fn samples(body: &Selection, noise: &[&str]) -> Vec<Sample> {
    let blocks = dom::select_all(body, SAMPLE_BOXES)
        .iter()
        .filter(|sample_box| {
            let title = dom::select_first_of(sample_box, &[".section-title"]);
            EXAMPLE_BOX.is_match(&clean_text(title.as_ref(), noise))
        })
        .map(|sample_box| {
            let mut input = String::new();
            let mut output = String::new();
            for item in dom::select_all(sample_box, SAMPLE_ITEMS) {
                let label = clean_text(dom::select_first_of(&item, &["span"]).as_ref(), noise);
                let text = raw_text(dom::select_first_of(&item, &["pre"]).as_ref());
                match classify_label(&label) {
                    Some(Side::Input) => input = text,
                    Some(Side::Output) => output = text,
                    None => {}
                }
            }
            (input, output)
        })
        .collect();
    number_blocks(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://www.nowcoder.com/practice/8a19cbe657394eeaac2f6ea9b0f6fcf6?tpId=13";

    const PAGE: &str = r#"
<html><head><title>二维数组中的查找_牛客题霸_牛客网</title></head><body>
<div class="ta-question question-module">
  <div class="question-title"><span class="hide-txt">JZ1 二维数组中的查找</span></div>
  <div class="content-wrapper">
    <div class="flex-row flex-none"><div class="flex-auto fs-xs">
      <span>中等</span><span>通过率：26.12%</span><span>时间限制：1秒</span><span>空间限制：64M</span>
    </div></div>
    <div class="describe-table"><p>在一个二维数组中查找整数。</p></div>
    <div class="section-sub-title">输入描述：</div>
    <div>一个矩阵和目标值</div>
    <div class="section-sub-title">输出描述：</div>
    <div>是否存在</div>
    <div class="section-box">
      <div class="section-title">示例1</div>
      <div class="question-sample">
        <div class="sample-item"><span>输入：</span><pre>7,[[1,2],[3,4]]</pre></div>
        <div class="sample-item"><span>返回值：</span><pre>false</pre></div>
        <div class="sample-item"><span>输出：</span><pre>false</pre></div>
      </div>
    </div>
    <div class="section-box"><div class="section-title">备注</div>
      <div class="question-sample"><div class="sample-item"><span>输入：</span><pre>ignored</pre></div></div>
    </div>
  </div>
</div>
</body></html>"#;

    #[test]
    fn missing_root_is_failure() {
        let result = extract(&dom::parse("<div class='ta-question'></div>"), URL, &Options::default());
        assert_eq!(result.reason(), Some("ta-question root not found"));
    }

    #[test]
    fn full_problem() {
        let doc = dom::parse(PAGE);
        let result = extract(&doc, URL, &Options::default());
        let problem = result.problem().cloned().expect("success");

        assert_eq!(problem.id, "P8a19cbe657394eeaac2f6ea9b0f6fcf6");
        assert_eq!(problem.title, "二维数组中的查找");
        assert_eq!(problem.difficulty, "中等");
        assert_eq!(problem.constraints, "时间限制：1秒\n空间限制：64M\n通过率：26.12%");
        assert_eq!(problem.input_format, "一个矩阵和目标值");
        assert_eq!(problem.output_format, "是否存在");
        assert!(problem.content.starts_with("在一个二维数组中查找整数。"));
        assert_eq!(result.samples(), &[Sample::new(1, "7,[[1,2],[3,4]]", "false")]);
    }

    #[test]
    fn title_prefix() {
        assert_eq!(strip_title_prefix("NC15 求二叉树的层序遍历"), "求二叉树的层序遍历");
        assert_eq!(strip_title_prefix("A1 short"), "A1 short");
    }

    #[test]
    fn no_info_strip_is_unknown_difficulty() {
        let doc = dom::parse(r#"<div class="ta-question question-module"></div>"#);
        let problem = extract(&doc, URL, &Options::default()).problem().cloned().expect("success");
        assert_eq!(problem.difficulty, "unknown");
        assert_eq!(problem.constraints, "");
        assert_eq!(problem.title, "Untitled");
    }
}
