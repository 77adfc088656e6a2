//! Section location by heading text.
//!
//! Statements on AtCoder and Luogu are flat runs of headings followed by
//! content. A section is found by matching heading text against an ordered
//! list of locale alternatives, then serialized either as its enclosing
//! `<section>` container or as the run of siblings up to the next heading.

use regex::Regex;
use tracing::trace;

use crate::clean::{clean_text, clean_text_with, raw_text, MATH_NOISE};
use crate::dom::{self, Selection};
use crate::error::Result;

/// Noise stripped from heading text before matching, on top of
/// [`MATH_NOISE`].
pub const HEADING_NOISE: &[&str] = &[".btn-copy", ".div-btn-copy", "script", "style"];

/// Ordered heading-text alternatives, one entry per locale.
///
/// A heading matches when any alternative matches. New locales are appended
/// with [`HeadingPatterns::push`] without touching the matching code.
#[derive(Debug, Clone, Default)]
pub struct HeadingPatterns {
    alternatives: Vec<Regex>,
}

impl HeadingPatterns {
    /// Compile the given alternatives.
    ///
    /// # Example
    ///
    /// ```rust
    /// use judge_scrape::section::HeadingPatterns;
    ///
    /// let constraints = HeadingPatterns::new(&[r"(?i)^Constraints$", r"^制約$"])?;
    /// assert!(constraints.matches("制約"));
    /// assert!(!constraints.matches("Input"));
    /// # Ok::<(), judge_scrape::Error>(())
    /// ```
    pub fn new(patterns: &[&str]) -> Result<Self> {
        let alternatives = patterns
            .iter()
            .map(|pattern| Regex::new(pattern))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { alternatives })
    }

    /// Append another locale's alternative.
    pub fn push(&mut self, pattern: &str) -> Result<()> {
        self.alternatives.push(Regex::new(pattern)?);
        Ok(())
    }

    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        self.alternatives.iter().any(|regex| regex.is_match(text))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }
}

/// Cleaned text of a heading, as used for matching.
#[must_use]
pub fn heading_text(heading: &Selection) -> String {
    clean_text_with(Some(heading), MATH_NOISE, HEADING_NOISE)
}

/// First element matching `heading_selector` (document order) whose cleaned
/// text matches any alternative.
#[must_use]
pub fn find_heading<'a>(
    root: &Selection<'a>,
    heading_selector: &str,
    patterns: &HeadingPatterns,
) -> Option<Selection<'a>> {
    let found = dom::select_all(root, heading_selector)
        .into_iter()
        .find(|heading| patterns.matches(&heading_text(heading)));
    if found.is_none() {
        trace!(heading_selector, alternatives = patterns.len(), "section heading not found");
    }
    found
}

/// Following element siblings of `heading`, up to but excluding the next
/// `h1`..`h6`.
#[must_use]
pub fn collect_until_next_heading<'a>(heading: &Selection<'a>) -> Vec<Selection<'a>> {
    let mut nodes = Vec::new();
    let mut current = dom::next_element_sibling(heading);
    while let Some(node) = current {
        if dom::is_heading(&node) {
            break;
        }
        current = dom::next_element_sibling(&node);
        nodes.push(node);
    }
    nodes
}

/// The `<section>` this heading titles, if it is the section's first direct
/// heading of its level.
#[must_use]
pub fn enclosing_section<'a>(heading: &Selection<'a>) -> Option<Selection<'a>> {
    let tag = dom::tag_name(heading)?;
    let section = dom::closest_ancestor(heading, "section")?;
    let title = dom::first_child_with_tag(&section, &tag)?;
    dom::same_node(&title, heading).then_some(section)
}

/// Serialize the section a heading introduces.
///
/// Prefers the whole enclosing `<section>` minus the heading, which keeps
/// nested sample and code blocks; otherwise joins the cleaned siblings up to
/// the next heading with a blank line. `pre`/`code` siblings are taken raw.
#[must_use]
pub fn section_text(heading: &Selection, noise: &[&str]) -> String {
    if let Some(section) = enclosing_section(heading) {
        let tag = dom::tag_name(heading).unwrap_or_default();
        let clone = dom::clone_element(&section);
        let root = dom::cloned_root(&clone, Some("section"));
        if let Some(title) = dom::first_child_with_tag(&root, &tag) {
            title.remove();
        }
        return clean_text(Some(&root), noise);
    }
    sibling_text(heading, noise)
}

/// Serialize only the sibling run after `heading`, ignoring any enclosing
/// `<section>`. Non-empty parts are joined with a blank line.
#[must_use]
pub fn sibling_text(heading: &Selection, noise: &[&str]) -> String {
    collect_until_next_heading(heading)
        .iter()
        .map(|node| read_node_text(node, noise))
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Locate and serialize a section; empty string when no heading matches.
#[must_use]
pub fn extract_section(
    root: &Selection,
    heading_selector: &str,
    patterns: &HeadingPatterns,
    noise: &[&str],
) -> String {
    find_heading(root, heading_selector, patterns)
        .map(|heading| section_text(&heading, noise))
        .unwrap_or_default()
}

fn read_node_text(node: &Selection, noise: &[&str]) -> String {
    match dom::tag_name(node).as_deref() {
        Some("pre" | "code") => raw_text(Some(node)),
        _ => clean_text(Some(node), noise),
    }
}
