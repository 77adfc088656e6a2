//! Text normalization for extracted fragments.
//!
//! Every string that ends up in a `ProblemRecord` passes through
//! [`normalize`], so records from different judges share one whitespace
//! convention: LF line endings, no trailing blanks, at most one empty line
//! in a row, no surrounding whitespace.

use crate::patterns::{MULTIPLE_NEWLINES, TRAILING_LINE_SPACE};

/// Canonicalizes whitespace and line endings.
///
/// - CRLF and lone CR become LF
/// - non-breaking spaces become regular spaces
/// - spaces/tabs before a newline are dropped
/// - runs of three or more newlines collapse to exactly two
/// - the whole string is trimmed
///
/// The transformation is idempotent.
///
/// # Example
///
/// ```rust
/// use judge_scrape::text::normalize;
///
/// assert_eq!(normalize("  1 2 \r\n\r\n\r\n3\u{a0}4  "), "1 2\n\n3 4");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let unified = text
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\u{a0}', " ");
    let stripped = TRAILING_LINE_SPACE.replace_all(&unified, "\n");
    let collapsed = MULTIPLE_NEWLINES.replace_all(&stripped, "\n\n");
    collapsed.trim().to_string()
}

/// Turns a URL path into an id fragment: `/a/b/c` becomes `a_b_c`.
///
/// Used as the last-resort problem id when a judge URL has no parseable
/// structured identifier.
#[must_use]
pub fn slugify_path(path: &str) -> String {
    path.strip_prefix('/').unwrap_or(path).replace('/', "_")
}

/// Joins the non-empty parts with `sep`, preserving order.
#[must_use]
pub fn join_nonempty<S: AsRef<str>>(parts: &[S], sep: &str) -> String {
    parts
        .iter()
        .map(AsRef::as_ref)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}
