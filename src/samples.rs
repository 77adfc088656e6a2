//! Sample input/output pairing.
//!
//! Judges mark up sample tests in three incompatible ways, plus LeetCode's
//! free-text examples:
//!
//! - **numbered headings** ("Sample Input 2" / "出力例 2"): [`NumberedSamples`]
//!   merges halves by the number in the heading
//! - **sequential `pre` blocks**: [`pair_sequential`] and [`zip_pairs`] pair
//!   positionally with a running counter
//! - **labeled blocks** (one container per example, a label per side):
//!   [`classify_label`] and [`number_blocks`]
//! - **example text** ("Example 1: Input: ... Output: ..."): [`split_examples`],
//!   with [`split_labeled_pre`] as the structural fallback
//!
//! Every strategy funnels through [`finalize`]: blank samples are dropped and
//! the rest are sorted by index.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::patterns::{INPUT_LABEL, OUTPUT_LABEL};
use crate::result::Sample;
use crate::text::normalize;

/// Which half of a sample a block holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Input,
    Output,
}

/// Classify a bilingual block label ("输入", "Output", ...).
///
/// Input wins when a label mentions both.
#[must_use]
pub fn classify_label(label: &str) -> Option<Side> {
    if INPUT_LABEL.is_match(label) {
        Some(Side::Input)
    } else if OUTPUT_LABEL.is_match(label) {
        Some(Side::Output)
    } else {
        None
    }
}

/// Drop blank and zero-indexed samples, order the rest by index, and keep
/// only the first sample for each index.
///
/// The result has positive, strictly increasing indices.
#[must_use]
pub fn finalize(mut samples: Vec<Sample>) -> Vec<Sample> {
    samples.retain(|sample| sample.index > 0 && !sample.is_blank());
    samples.sort_by_key(|sample| sample.index);
    samples.dedup_by_key(|sample| sample.index);
    samples
}

// =============================================================================
// Numbered headings
// =============================================================================

/// Accumulator keyed by the number parsed from sample headings.
#[derive(Debug, Default)]
pub struct NumberedSamples {
    by_index: BTreeMap<u32, Sample>,
}

impl NumberedSamples {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one half of sample `index`; a later call for the same side
    /// overwrites the earlier text.
    pub fn record(&mut self, index: u32, side: Side, text: String) {
        let sample = self
            .by_index
            .entry(index)
            .or_insert_with(|| Sample::new(index, "", ""));
        match side {
            Side::Input => sample.input = text,
            Side::Output => sample.output = text,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_index.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_index.is_empty()
    }

    /// Samples sorted by heading number.
    #[must_use]
    pub fn into_samples(self) -> Vec<Sample> {
        finalize(self.by_index.into_values().collect())
    }
}

// =============================================================================
// Sequential pairing
// =============================================================================

/// Pair `(input, output, input, output, ...)` by position.
///
/// A trailing unpaired input gets an empty output. Indices are a dense
/// `1..=N` counter over the kept pairs.
#[must_use]
pub fn pair_sequential(texts: Vec<String>) -> Vec<Sample> {
    let mut iter = texts.into_iter();
    let mut pairs = Vec::new();
    while let Some(input) = iter.next() {
        let output = iter.next().unwrap_or_default();
        pairs.push((input, output));
    }
    number_blocks(pairs)
}

/// Pair two parallel lists by position; the shorter side is padded with
/// empty strings.
#[must_use]
pub fn zip_pairs(inputs: Vec<String>, outputs: Vec<String>) -> Vec<Sample> {
    let count = inputs.len().max(outputs.len());
    let mut inputs = inputs.into_iter();
    let mut outputs = outputs.into_iter();
    let pairs = (0..count)
        .map(|_| {
            (
                inputs.next().unwrap_or_default(),
                outputs.next().unwrap_or_default(),
            )
        })
        .collect();
    number_blocks(pairs)
}

/// Number `(input, output)` blocks in parse order, skipping blank ones.
#[must_use]
pub fn number_blocks(blocks: Vec<(String, String)>) -> Vec<Sample> {
    let samples = blocks
        .into_iter()
        .filter(|(input, output)| !(input.is_empty() && output.is_empty()))
        .zip(1u32..)
        .map(|((input, output), index)| Sample::new(index, input, output))
        .collect();
    finalize(samples)
}

// =============================================================================
// Example text splitting
// =============================================================================

#[allow(clippy::expect_used)]
static EXAMPLE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^(?:示例|Example)\s*(\d+)\s*[:：]?").expect("EXAMPLE_HEADER regex")
});

#[allow(clippy::expect_used)]
static EXAMPLES_END: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^(?:提示|Constraints?)\s*[:：]?").expect("EXAMPLES_END regex")
});

#[allow(clippy::expect_used)]
static INPUT_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:输入|Input)\s*[:：]\s*").expect("INPUT_MARKER regex"));

#[allow(clippy::expect_used)]
static INPUT_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\n(?:输出|Output)\s*[:：]").expect("INPUT_END regex"));

#[allow(clippy::expect_used)]
static OUTPUT_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:输出|Output)\s*[:：]\s*").expect("OUTPUT_MARKER regex"));

#[allow(clippy::expect_used)]
static OUTPUT_END: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\n(?:解释|Explanation|提示|Constraints?)\s*[:：]").expect("OUTPUT_END regex")
});

/// Text between `marker` and the first `end` after it, if `marker` occurs.
fn labeled_value(body: &str, marker: &Regex, end: &Regex) -> Option<String> {
    let start = marker.find(body)?.end();
    let rest = &body[start..];
    let stop = end.find(rest).map_or(rest.len(), |m| m.start());
    Some(normalize(&rest[..stop]))
}

/// Parse `Input: ... Output: ...` out of one example body.
///
/// Returns `None` when neither label is present.
#[must_use]
pub fn parse_input_output(body: &str) -> Option<(String, String)> {
    let input = labeled_value(body, &INPUT_MARKER, &INPUT_END);
    let output = labeled_value(body, &OUTPUT_MARKER, &OUTPUT_END);
    if input.is_none() && output.is_none() {
        return None;
    }
    Some((input.unwrap_or_default(), output.unwrap_or_default()))
}

/// Split statement text into samples at `Example N:` / `示例 N：` headers.
///
/// Each example runs to the next header or to a `提示`/`Constraints` line.
/// The number in the header is the index. A header without a usable number,
/// or whose number does not exceed the previous index, takes the next index
/// in parse order instead.
#[must_use]
pub fn split_examples(text: &str) -> Vec<Sample> {
    let headers: Vec<_> = EXAMPLE_HEADER.captures_iter(text).collect();
    let mut samples = Vec::new();

    for (position, captures) in headers.iter().enumerate() {
        let Some(header) = captures.get(0) else {
            continue;
        };
        let body_end = headers
            .get(position + 1)
            .and_then(|next| next.get(0))
            .map_or(text.len(), |next| next.start());
        let mut body = &text[header.end()..body_end];
        if let Some(end) = EXAMPLES_END.find(body) {
            body = &body[..end.start()];
        }

        let body = normalize(body);
        if body.is_empty() {
            continue;
        }
        let Some((input, output)) = parse_input_output(&body) else {
            continue;
        };

        let previous = samples.last().map_or(0, |sample: &Sample| sample.index);
        let index = captures
            .get(1)
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .filter(|index| *index > previous)
            .unwrap_or_else(|| previous.saturating_add(1));
        samples.push(Sample::new(index, input, output));
    }

    finalize(samples)
}

/// Structural fallback: each `pre` text carrying `Input:`/`Output:` labels
/// is one sample, numbered in document order.
#[must_use]
pub fn split_labeled_pre(texts: &[String]) -> Vec<Sample> {
    let blocks = texts
        .iter()
        .filter_map(|text| parse_input_output(text))
        .collect();
    number_blocks(blocks)
}

/// Prefer the text split when it found anything; otherwise run `fallback`.
pub fn prefer_text_split<F>(text_samples: Vec<Sample>, fallback: F) -> Vec<Sample>
where
    F: FnOnce() -> Vec<Sample>,
{
    if text_samples.is_empty() {
        fallback()
    } else {
        text_samples
    }
}

// =============================================================================
// Content serialization
// =============================================================================

/// Statement description followed by one labeled block per sample side,
/// joined with blank lines. Empty parts are skipped.
#[must_use]
pub fn render_content(description: &str, samples: &[Sample], inline_samples: bool) -> String {
    let mut parts = vec![description.to_string()];
    if inline_samples {
        for sample in samples {
            parts.push(format!("Sample {} Input:\n{}", sample.index, sample.input));
            parts.push(format!("Sample {} Output:\n{}", sample.index, sample.output));
        }
    }
    crate::text::join_nonempty(&parts, "\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn classify_label_is_bilingual() {
        assert_eq!(classify_label("输入"), Some(Side::Input));
        assert_eq!(classify_label("Sample Input"), Some(Side::Input));
        assert_eq!(classify_label("输出"), Some(Side::Output));
        assert_eq!(classify_label("output"), Some(Side::Output));
        assert_eq!(classify_label("说明"), None);
    }

    #[test]
    fn numbered_samples_merge_and_sort() {
        let mut acc = NumberedSamples::new();
        acc.record(2, Side::Output, "4".to_string());
        acc.record(1, Side::Input, "1 2".to_string());
        acc.record(2, Side::Input, "2 2".to_string());
        acc.record(1, Side::Output, "3".to_string());
        acc.record(3, Side::Input, String::new());
        assert_eq!(acc.len(), 3);

        let samples = acc.into_samples();
        assert_eq!(
            samples,
            vec![Sample::new(1, "1 2", "3"), Sample::new(2, "2 2", "4")]
        );
    }

    #[test]
    fn numbered_samples_keep_one_sided() {
        let mut acc = NumberedSamples::new();
        acc.record(1, Side::Input, "5".to_string());
        assert_eq!(acc.into_samples(), vec![Sample::new(1, "5", "")]);
    }

    #[test]
    fn pair_sequential_pads_odd_input() {
        let samples = pair_sequential(strings(&["a", "b", "c"]));
        assert_eq!(samples, vec![Sample::new(1, "a", "b"), Sample::new(2, "c", "")]);
    }

    #[test]
    fn zip_pairs_dense_after_blank_pair() {
        let samples = zip_pairs(strings(&["1", "", "3"]), strings(&["x", "", "z"]));
        let indices: Vec<u32> = samples.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![1, 2]);
        assert_eq!(samples[1].input, "3");
    }

    #[test]
    fn zip_pairs_uneven_lists() {
        let samples = zip_pairs(strings(&["1"]), strings(&["a", "b"]));
        assert_eq!(samples, vec![Sample::new(1, "1", "a"), Sample::new(2, "", "b")]);
    }

    #[test]
    fn split_examples_english() {
        let text = "Given nums.\n\nExample 1:\nInput: nums = [2,7]\nOutput: [0,1]\nExplanation: because.\n\nExample 2:\nInput: nums = [3]\nOutput: []\n\nConstraints:\n1 <= n";
        let samples = split_examples(text);
        assert_eq!(
            samples,
            vec![
                Sample::new(1, "nums = [2,7]", "[0,1]"),
                Sample::new(2, "nums = [3]", "[]"),
            ]
        );
    }

    #[test]
    fn split_examples_chinese_full_width_colon() {
        let text = "描述\n示例 1：\n输入：s = \"ab\"\n输出：2\n\n提示：\n1 <= s.length";
        assert_eq!(split_examples(text), vec![Sample::new(1, "s = \"ab\"", "2")]);
    }

    #[test]
    fn split_examples_duplicate_header_takes_next_index() {
        let samples = split_examples("Example 1:\nInput: a\nOutput: b\nExample 1:\nInput: c\nOutput: d");
        assert_eq!(samples, vec![Sample::new(1, "a", "b"), Sample::new(2, "c", "d")]);
    }

    #[test]
    fn finalize_drops_zero_and_duplicate_indices() {
        let samples = finalize(vec![
            Sample::new(1, "a", "b"),
            Sample::new(0, "x", "y"),
            Sample::new(1, "c", "d"),
        ]);
        assert_eq!(samples, vec![Sample::new(1, "a", "b")]);
    }

    #[test]
    fn split_examples_without_labels_is_empty() {
        assert!(split_examples("Example 1:\nsee figure").is_empty());
        assert!(split_examples("no examples here").is_empty());
    }

    #[test]
    fn split_labeled_pre_numbers_in_order() {
        let texts = strings(&["Input: 1\nOutput: 2", "nothing", "输入：3\n输出：4"]);
        assert_eq!(
            split_labeled_pre(&texts),
            vec![Sample::new(1, "1", "2"), Sample::new(2, "3", "4")]
        );
    }

    #[test]
    fn prefer_text_split_falls_back_only_when_empty() {
        let text = vec![Sample::new(1, "a", "b")];
        let chosen = prefer_text_split(text.clone(), || vec![Sample::new(1, "x", "y")]);
        assert_eq!(chosen, text);

        let chosen = prefer_text_split(Vec::new(), || vec![Sample::new(1, "x", "y")]);
        assert_eq!(chosen, vec![Sample::new(1, "x", "y")]);
    }

    #[test]
    fn render_content_labels_each_side() {
        let content = render_content("Desc", &[Sample::new(1, "1\n2", "3")], true);
        assert_eq!(content, "Desc\n\nSample 1 Input:\n1\n2\n\nSample 1 Output:\n3");
    }

    #[test]
    fn render_content_without_description_or_inlining() {
        let samples = [Sample::new(1, "1", "2")];
        assert_eq!(render_content("", &samples, true), "Sample 1 Input:\n1\n\nSample 1 Output:\n2");
        assert_eq!(render_content("Desc", &samples, false), "Desc");
    }
}
