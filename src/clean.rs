//! Node cleaning: render a subtree to plain text without its noise.
//!
//! Judge pages interleave statement text with rendering residue: MathJax and
//! KaTeX emit both a visual and a MathML copy of each formula, sample blocks
//! carry "Copy" buttons, and scripts sit inline. [`clean_text`] renders a
//! private deep copy of the node with those descendants removed, leaving the
//! caller's document untouched.

use crate::dom::{self, Selection};
use crate::text::normalize;

/// Math rendering residue stripped everywhere.
pub const MATH_NOISE: &[&str] = &[".MathJax", ".MathJax_Preview", ".katex-mathml"];

/// Default noise set: math residue plus inline scripts and styles.
pub const DEFAULT_NOISE: &[&str] = &[
    ".MathJax",
    ".MathJax_Preview",
    ".katex-mathml",
    "script",
    "style",
];

/// Copy-to-clipboard widgets found next to AtCoder samples and headings.
pub const COPY_BUTTON_NOISE: &[&str] = &[".btn-copy", ".div-btn-copy"];

/// Render `node` to normalized text with every descendant matching any of
/// `noise` removed.
///
/// Returns an empty string for `None` or an empty selection. The node itself
/// is never removed, only its descendants; the source document is never
/// mutated.
#[must_use]
pub fn clean_text(node: Option<&Selection>, noise: &[&str]) -> String {
    let Some(node) = node.filter(|n| n.exists()) else {
        return String::new();
    };

    // Nothing to strip: render in place, no clone needed.
    if !noise.iter().any(|selector| has_match(node, selector)) {
        return normalize(&dom::inner_text(node));
    }

    let clone = dom::clone_element(node);
    let root = dom::cloned_root(&clone, dom::tag_name(node).as_deref());
    for selector in noise {
        if let Some(found) = root.try_select(selector) {
            found.remove();
        }
    }
    normalize(&dom::inner_text(&root))
}

/// [`clean_text`] with a base noise set plus caller-supplied selectors.
#[must_use]
pub fn clean_text_with(node: Option<&Selection>, base: &[&str], extra: &[&str]) -> String {
    if extra.is_empty() {
        return clean_text(node, base);
    }
    let combined: Vec<&str> = base.iter().chain(extra.iter()).copied().collect();
    clean_text(node, &combined)
}

/// Render a preformatted node (`pre`, `code`, `textarea`) as-is.
///
/// Sample blocks must keep their exact layout, so nothing is stripped.
#[must_use]
pub fn raw_text(node: Option<&Selection>) -> String {
    node.filter(|n| n.exists())
        .map(|n| normalize(&dom::inner_text(n)))
        .unwrap_or_default()
}

fn has_match(node: &Selection, selector: &str) -> bool {
    node.try_select(selector).is_some_and(|found| found.exists())
}
