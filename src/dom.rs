//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate: parsing, tag and sibling
//! navigation, deep cloning into a private document, a static visibility
//! test, and an `innerText`-style renderer that keeps line structure
//! (block elements, `<br>`, preformatted samples) instead of flattening
//! everything the way `textContent` does.

use dom_query::NodeRef;

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

use crate::patterns::{COLLAPSIBLE_WHITESPACE, HIDDEN_STYLE};

/// Elements rendered on their own line.
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "caption", "center", "dd", "details", "dialog",
    "div", "dl", "dt", "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3",
    "h4", "h5", "h6", "header", "hgroup", "hr", "li", "main", "nav", "ol", "pre", "section",
    "summary", "table", "tbody", "tfoot", "thead", "tr", "ul",
];

/// Elements that never contribute rendered text.
const SKIPPED_ELEMENTS: &[&str] = &[
    "head", "link", "meta", "noscript", "script", "style", "template", "title",
];

/// Heading tags, `h1` through `h6`.
pub const HEADING_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(NodeRef::node_name)
        .map(|t| t.to_ascii_lowercase())
}

/// Check whether the element is one of `h1`..`h6`.
#[must_use]
pub fn is_heading(sel: &Selection) -> bool {
    tag_name(sel).is_some_and(|t| HEADING_TAGS.contains(&t.as_str()))
}

/// Check a single class token, the way `classList.contains` does.
#[must_use]
pub fn has_class(sel: &Selection, class: &str) -> bool {
    sel.attr("class")
        .is_some_and(|value| value.split_whitespace().any(|token| token == class))
}

/// Whether two selections point at the same first node.
#[must_use]
pub fn same_node(a: &Selection, b: &Selection) -> bool {
    match (a.nodes().first(), b.nodes().first()) {
        (Some(x), Some(y)) => x.id == y.id,
        _ => false,
    }
}

// === Tree Navigation ===

/// Direct element children, in document order.
#[must_use]
pub fn element_children<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    let Some(node) = sel.nodes().first() else {
        return Vec::new();
    };
    node.children()
        .into_iter()
        .filter(NodeRef::is_element)
        .map(Selection::from)
        .collect()
}

/// Get next element sibling (skipping text nodes)
#[must_use]
pub fn next_element_sibling<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    sel.nodes().first().and_then(|node| {
        let mut sibling = node.next_sibling();
        while let Some(s) = sibling {
            if s.is_element() {
                return Some(Selection::from(s));
            }
            sibling = s.next_sibling();
        }
        None
    })
}

/// Parent element, if the node has one.
#[must_use]
pub fn parent_element<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    sel.nodes()
        .first()
        .and_then(NodeRef::parent)
        .filter(NodeRef::is_element)
        .map(Selection::from)
}

/// Nearest strict ancestor with the given tag name.
#[must_use]
pub fn closest_ancestor<'a>(sel: &Selection<'a>, tag: &str) -> Option<Selection<'a>> {
    let mut current = sel.nodes().first().and_then(NodeRef::parent);
    while let Some(node) = current {
        if node.is_element() && node.node_name().is_some_and(|n| n.eq_ignore_ascii_case(tag)) {
            return Some(Selection::from(node));
        }
        current = node.parent();
    }
    None
}

/// First direct child element with the given tag name.
#[must_use]
pub fn first_child_with_tag<'a>(sel: &Selection<'a>, tag: &str) -> Option<Selection<'a>> {
    element_children(sel)
        .into_iter()
        .find(|child| tag_name(child).as_deref() == Some(tag))
}

// === Querying ===

/// First element matching any selector of the list, tried in list order.
///
/// Unlike a comma-joined selector, list order wins over document order.
#[must_use]
pub fn select_first_of<'a>(root: &Selection<'a>, selectors: &[&str]) -> Option<Selection<'a>> {
    selectors.iter().find_map(|selector| {
        let found = root.select_single(selector);
        found.exists().then_some(found)
    })
}

/// Document-level variant of [`select_first_of`].
#[must_use]
pub fn document_first_of<'a>(doc: &'a Document, selectors: &[&str]) -> Option<Selection<'a>> {
    selectors
        .iter()
        .find_map(|selector| first_node(&doc.select(selector)))
}

/// First node of a selection as its own selection.
#[must_use]
pub fn first_node<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    sel.nodes().first().copied().map(Selection::from)
}

/// All matches of `selector` below `root` as individual selections.
#[must_use]
pub fn select_all<'a>(root: &Selection<'a>, selector: &str) -> Vec<Selection<'a>> {
    root.select(selector)
        .nodes()
        .iter()
        .copied()
        .map(Selection::from)
        .collect()
}

// === Visibility ===

/// Static stand-in for computed visibility.
///
/// Without a layout engine the only signals are the `hidden` attribute and
/// inline `display: none` / `visibility: hidden`, checked on the node and all
/// of its ancestors. Stylesheet rules are not evaluated.
#[must_use]
pub fn is_visible(sel: &Selection) -> bool {
    let mut current = sel.nodes().first().copied();
    if current.is_none() {
        return false;
    }
    while let Some(node) = current {
        if node.is_element() && is_hidden_element(&Selection::from(node)) {
            return false;
        }
        current = node.parent();
    }
    true
}

fn is_hidden_element(sel: &Selection) -> bool {
    sel.has_attr("hidden") || sel.attr("style").is_some_and(|style| HIDDEN_STYLE.is_match(&style))
}

// === Cloning ===

/// Outer HTML of the selection.
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> StrTendril {
    sel.html()
}

/// Deep-clone an element into a new, private Document.
///
/// The clone shares nothing with the source tree, so it can be mutated
/// freely and dropped afterwards.
#[must_use]
pub fn clone_element(sel: &Selection) -> Document {
    Document::from(outer_html(sel))
}

/// Locate the cloned element inside a document built by [`clone_element`].
///
/// Re-parsing wraps fragments in `html`/`body`; the clone is the first body
/// child carrying the original tag. Falls back to `body` for fragments the
/// parser restructures (e.g. bare table rows).
#[must_use]
pub fn cloned_root<'a>(doc: &'a Document, tag: Option<&str>) -> Selection<'a> {
    let body = doc.select("body");
    if let Some(tag) = tag {
        if tag == "body" || tag == "html" {
            return body;
        }
        if let Some(root) = first_child_with_tag(&body, tag) {
            return root;
        }
    }
    body
}

// === Text Content ===

/// Raw `textContent` of the node and its descendants.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Render text roughly the way a browser's `innerText` does.
///
/// - runs of HTML whitespace collapse to one space outside `pre`/`textarea`
/// - block elements start on a new line, `p` is surrounded by a blank line
/// - `br` is a hard line break, table cells are tab separated
/// - `script`, `style` and hidden descendants contribute nothing
///
/// The output is not normalized; pass it through [`crate::text::normalize`].
#[must_use]
pub fn inner_text(sel: &Selection) -> String {
    let mut renderer = TextRenderer::default();
    for node in sel.nodes() {
        renderer.walk(node, false, true);
    }
    renderer.out
}

#[derive(Default)]
struct TextRenderer {
    out: String,
    pending_breaks: usize,
}

impl TextRenderer {
    fn walk(&mut self, node: &NodeRef, preformatted: bool, is_root: bool) {
        if node.is_text() {
            let text = node.text();
            self.push_text(&text, preformatted);
            return;
        }

        if !node.is_element() {
            for child in node.children() {
                self.walk(&child, preformatted, false);
            }
            return;
        }

        let name = node
            .node_name()
            .map(|n| n.to_ascii_lowercase())
            .unwrap_or_default();
        if SKIPPED_ELEMENTS.contains(&name.as_str()) {
            return;
        }
        if !is_root && is_hidden_element(&Selection::from(*node)) {
            return;
        }

        match name.as_str() {
            "br" => {
                self.hard_break();
                return;
            }
            "td" | "th" => {
                if !self.at_line_start() && self.pending_breaks == 0 {
                    self.out.push('\t');
                }
            }
            _ => {}
        }

        let breaks = if name == "p" {
            2
        } else if BLOCK_ELEMENTS.contains(&name.as_str()) {
            1
        } else {
            0
        };
        let preformatted = preformatted || name == "pre" || name == "textarea";

        self.request_breaks(breaks);
        for child in node.children() {
            self.walk(&child, preformatted, false);
        }
        self.request_breaks(breaks);
    }

    fn push_text(&mut self, text: &str, preformatted: bool) {
        if text.is_empty() {
            return;
        }

        if preformatted {
            self.flush_breaks();
            self.out.push_str(text);
            return;
        }

        let collapsed = COLLAPSIBLE_WHITESPACE.replace_all(text, " ");
        if collapsed.trim_matches(' ').is_empty() {
            if self.pending_breaks == 0 && !self.at_line_start() && !self.out.ends_with(' ') {
                self.out.push(' ');
            }
            return;
        }

        self.flush_breaks();
        let slice = if self.at_line_start() || self.out.ends_with(' ') {
            collapsed.trim_start_matches(' ')
        } else {
            &collapsed
        };
        self.out.push_str(slice);
    }

    fn at_line_start(&self) -> bool {
        self.out.is_empty() || self.out.ends_with('\n')
    }

    fn request_breaks(&mut self, count: usize) {
        self.pending_breaks = self.pending_breaks.max(count);
    }

    fn trim_trailing_spaces(&mut self) {
        let kept = self.out.trim_end_matches([' ', '\t']).len();
        self.out.truncate(kept);
    }

    fn flush_breaks(&mut self) {
        if self.pending_breaks == 0 {
            return;
        }
        if self.out.is_empty() {
            self.pending_breaks = 0;
            return;
        }
        self.trim_trailing_spaces();
        let existing = self.out.len() - self.out.trim_end_matches('\n').len();
        for _ in existing..self.pending_breaks {
            self.out.push('\n');
        }
        self.pending_breaks = 0;
    }

    fn hard_break(&mut self) {
        self.flush_breaks();
        self.trim_trailing_spaces();
        self.out.push('\n');
    }
}
