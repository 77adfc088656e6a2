//! Compiled regex patterns shared across extractors.
//!
//! All patterns are compiled once at first use using `LazyLock`.
//! Site-specific patterns live next to their extractor in `sites::*`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Text Normalization Patterns
// =============================================================================

/// Spaces and tabs sitting right before a line break.
pub static TRAILING_LINE_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+\n").expect("TRAILING_LINE_SPACE regex"));

/// Three or more consecutive newlines.
pub static MULTIPLE_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("MULTIPLE_NEWLINES regex"));

/// HTML whitespace run collapsed when rendering non-preformatted text.
/// NBSP is deliberately absent: browsers keep it as a hard space.
pub static COLLAPSIBLE_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\n\r\x0C]+").expect("COLLAPSIBLE_WHITESPACE regex"));

// =============================================================================
// Visibility Patterns
// =============================================================================

/// Inline style declarations that hide an element.
pub static HIDDEN_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|;)\s*(?:display\s*:\s*none|visibility\s*:\s*hidden)\s*(?:!important\s*)?(?:;|$)")
        .expect("HIDDEN_STYLE regex")
});

// =============================================================================
// Sample Label Patterns
// =============================================================================

/// Label of an input block ("输入", "Input", "输入例", ...).
pub static INPUT_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)输入|input").expect("INPUT_LABEL regex"));

/// Label of an output block ("输出", "Output", ...). Core-code problems
/// label the expected value "返回值".
pub static OUTPUT_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)输出|返回值|output").expect("OUTPUT_LABEL regex"));

// =============================================================================
// Difficulty Patterns
// =============================================================================

/// Bilingual difficulty words used by LeetCode and Nowcoder.
pub static DIFFICULTY_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)简单|中等|困难|入门|easy|medium|hard").expect("DIFFICULTY_WORD regex")
});
