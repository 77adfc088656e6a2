//! URL-based site detection.
//!
//! Patterns are tried in a fixed order and the first match wins. Matching is
//! case-insensitive and every pattern tolerates a trailing `?query`.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::error::{Error, Result};
use crate::result::Source;

/// Judge site an extractor is registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Site {
    Codeforces,
    AtCoder,
    LeetCode,
    Luogu,
    NowcoderAcm,
    NowcoderPractice,
}

impl Site {
    /// Every site, in routing order of their first pattern.
    pub const ALL: [Self; 6] = [
        Self::Codeforces,
        Self::AtCoder,
        Self::NowcoderAcm,
        Self::NowcoderPractice,
        Self::Luogu,
        Self::LeetCode,
    ];

    /// `source` value written into records from this site.
    #[must_use]
    pub const fn source(self) -> Source {
        match self {
            Self::Codeforces => Source::Codeforces,
            Self::AtCoder => Source::Atcoder,
            Self::LeetCode => Source::Leetcode,
            Self::Luogu => Source::Luogu,
            Self::NowcoderAcm => Source::Nowcoder,
            Self::NowcoderPractice => Source::NowcoderPractice,
        }
    }

    /// Stable lowercase name, used in logs and errors.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Codeforces => "codeforces",
            Self::AtCoder => "atcoder",
            Self::LeetCode => "leetcode",
            Self::Luogu => "luogu",
            Self::NowcoderAcm => "nowcoder_acm",
            Self::NowcoderPractice => "nowcoder_practice",
        }
    }
}

impl std::fmt::Display for Site {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

const ROUTE_PATTERNS: &[(&str, Site)] = &[
    (
        r"^https://codeforces\.com/(contest|gym)/\d+/problem/[A-Za-z0-9_]+(\?.*)?$",
        Site::Codeforces,
    ),
    (
        r"^https://codeforces\.com/group/[^/]+/(contest|gym)/\d+/problem/[A-Za-z0-9_]+(\?.*)?$",
        Site::Codeforces,
    ),
    (
        r"^https://atcoder\.jp/contests/[^/]+/tasks/[^/?#]+(\?.*)?$",
        Site::AtCoder,
    ),
    (
        r"^https://ac\.nowcoder\.com/acm/problem/\d+(\?.*)?$",
        Site::NowcoderAcm,
    ),
    (
        r"^https://ac\.nowcoder\.com/acm/contest/\d+/[A-Za-z0-9_]+(\?.*)?$",
        Site::NowcoderAcm,
    ),
    (
        r"^https://www\.nowcoder\.com/practice/[0-9a-fA-F]+(\?.*)?$",
        Site::NowcoderPractice,
    ),
    (
        r"^https://www\.luogu\.com\.cn/problem/[A-Za-z0-9]+(\?.*)?$",
        Site::Luogu,
    ),
    (
        r"^https://leetcode\.cn/problems/[^/?#]+(/description/?)?(\?.*)?$",
        Site::LeetCode,
    ),
];

#[allow(clippy::expect_used)]
static ROUTES: LazyLock<Vec<(Regex, Site)>> = LazyLock::new(|| {
    ROUTE_PATTERNS
        .iter()
        .map(|(pattern, site)| {
            let regex = RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .expect("route regex");
            (regex, *site)
        })
        .collect()
});

/// Site whose pattern matches `url`, trying patterns in order.
///
/// # Example
///
/// ```rust
/// use judge_scrape::router::{resolve, Site};
///
/// assert_eq!(
///     resolve("https://codeforces.com/contest/1500/problem/A"),
///     Some(Site::Codeforces)
/// );
/// assert_eq!(resolve("https://example.com/"), None);
/// ```
#[must_use]
pub fn resolve(url: &str) -> Option<Site> {
    let site = ROUTES
        .iter()
        .find(|(regex, _)| regex.is_match(url))
        .map(|(_, site)| *site);
    debug!(url, site = site.map(Site::name), "route resolved");
    site
}

#[must_use]
pub fn is_supported(url: &str) -> bool {
    resolve(url).is_some()
}

/// Like [`resolve`], failing with `Error::UnsupportedPage` when nothing matches.
pub fn require(url: &str) -> Result<Site> {
    resolve(url).ok_or_else(|| Error::UnsupportedPage(url.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_every_site() {
        let cases = [
            ("https://codeforces.com/contest/1500/problem/A", Site::Codeforces),
            ("https://codeforces.com/gym/104000/problem/B1", Site::Codeforces),
            ("https://codeforces.com/group/abc/contest/1500/problem/A", Site::Codeforces),
            ("https://atcoder.jp/contests/abc300/tasks/abc300_a", Site::AtCoder),
            ("https://ac.nowcoder.com/acm/problem/14516", Site::NowcoderAcm),
            ("https://ac.nowcoder.com/acm/contest/5678/C", Site::NowcoderAcm),
            ("https://www.nowcoder.com/practice/8a19cbe657394eeaac2f6ea9b0f6fcf6", Site::NowcoderPractice),
            ("https://www.luogu.com.cn/problem/P1001", Site::Luogu),
            ("https://leetcode.cn/problems/two-sum", Site::LeetCode),
            ("https://leetcode.cn/problems/two-sum/description/", Site::LeetCode),
        ];
        for (url, site) in cases {
            assert_eq!(resolve(url), Some(site), "{url}");
        }
    }

    #[test]
    fn query_strings_are_tolerated() {
        assert!(is_supported("https://codeforces.com/contest/1/problem/A?locale=en"));
        assert!(is_supported("https://leetcode.cn/problems/two-sum/description/?envType=daily"));
        assert!(is_supported("https://www.luogu.com.cn/problem/P1001?contestId=1"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(
            resolve("HTTPS://CODEFORCES.COM/CONTEST/1/PROBLEM/A"),
            Some(Site::Codeforces)
        );
        assert_eq!(resolve("https://AtCoder.jp/contests/arc1/tasks/arc1_b"), Some(Site::AtCoder));
    }

    #[test]
    fn near_misses_are_rejected() {
        for url in [
            "http://codeforces.com/contest/1/problem/A",
            "https://codeforces.com/contest/1/problems",
            "https://codeforces.com/problemset/problem/1/A",
            "https://atcoder.jp/contests/abc300/tasks",
            "https://www.nowcoder.com/practice/xyz",
            "https://leetcode.com/problems/two-sum",
            "https://leetcode.cn/problems/two-sum/",
            "https://leetcode.cn/problems/two-sum/solutions/",
            "https://www.luogu.com.cn/problem/P1001/solution",
            "",
        ] {
            assert_eq!(resolve(url), None, "{url}");
        }
    }

    #[test]
    fn require_reports_the_url() {
        let err = require("https://example.com/x");
        assert!(matches!(err, Err(Error::UnsupportedPage(ref url)) if url == "https://example.com/x"));
        assert!(require("https://www.luogu.com.cn/problem/P1001").is_ok());
    }

    #[test]
    fn sites_map_to_sources() {
        assert_eq!(Site::NowcoderAcm.source(), Source::Nowcoder);
        assert_eq!(Site::AtCoder.source().as_str(), "atcoder");
        assert_eq!(Site::ALL.len(), 6);
        assert_eq!(Site::LeetCode.to_string(), "leetcode");
    }
}
