//! Charset detection and transcoding for raw page bytes.
//!
//! Saved judge pages are mostly UTF-8, but older Chinese pages still declare
//! GBK/GB2312. The declaration is read from a byte-order mark or a `<meta>`
//! tag near the top of the document.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use tracing::trace;

/// How far into the document a charset declaration is looked for.
const SNIFF_LEN: usize = 1024;

/// `<meta charset=...>` and the `content="...; charset=..."` form.
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s;/>]+)"#).expect("META_CHARSET regex")
});

/// Detect the document encoding: BOM first, then a `<meta>` declaration in
/// the first kilobyte, else UTF-8.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);
    META_CHARSET
        .captures(&head)
        .and_then(|caps| Encoding::for_label(caps[1].as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode page bytes to UTF-8, replacing malformed sequences with U+FFFD.
///
/// # Examples
///
/// ```
/// use judge_scrape::encoding::transcode_to_utf8;
///
/// let html = b"<html><body>Hello</body></html>";
/// assert!(transcode_to_utf8(html).contains("Hello"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    let (decoded, used, had_errors) = encoding.decode(html);
    if had_errors {
        trace!(encoding = used.name(), "malformed bytes replaced while decoding");
    }
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::GBK;

    #[test]
    fn default_is_utf8() {
        assert_eq!(detect_encoding(b"<html><body>x</body></html>"), UTF_8);
    }

    #[test]
    fn meta_charset_gbk() {
        let html = br#"<html><head><meta charset="gbk"></head></html>"#;
        assert_eq!(detect_encoding(html), GBK);
    }

    #[test]
    fn content_type_charset() {
        let html = br#"<meta http-equiv="Content-Type" content="text/html; charset=gb2312">"#;
        assert_eq!(detect_encoding(html), GBK);
    }

    #[test]
    fn unknown_label_falls_back() {
        let html = br#"<meta charset="not-a-charset">"#;
        assert_eq!(detect_encoding(html), UTF_8);
    }

    #[test]
    fn bom_wins_over_meta() {
        let mut html = vec![0xEF, 0xBB, 0xBF];
        html.extend_from_slice(br#"<meta charset="gbk"><p>ok</p>"#);
        assert_eq!(detect_encoding(&html), UTF_8);
        assert!(transcode_to_utf8(&html).starts_with("<meta"));
    }

    #[test]
    fn transcodes_gbk_statement() {
        let (body, _, _) = GBK.encode("<meta charset=\"gbk\"><h2>题目描述</h2>");
        let text = transcode_to_utf8(&body);
        assert!(text.contains("题目描述"));
    }

    #[test]
    fn malformed_utf8_is_replaced() {
        let text = transcode_to_utf8(b"<p>\xFF</p>");
        assert!(text.contains('\u{FFFD}'));
    }
}
