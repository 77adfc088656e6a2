//! Configuration options for problem extraction.
//!
//! The `Options` struct controls the parts of a record that are caller
//! policy rather than page content: the initial status, placeholder strings,
//! whether samples are inlined into `content`, and extra noise selectors.

/// Configuration options for problem extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use judge_scrape::Options;
///
/// let options = Options {
///     status: "attempted".to_string(),
///     inline_samples: false,
///     ..Options::default()
/// };
/// assert_eq!(options.untitled, "Untitled");
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Status written into every record.
    ///
    /// Default: `"unsolved"`
    pub status: String,

    /// Append `Sample N Input:` / `Sample N Output:` blocks to `content`.
    ///
    /// Samples are always returned on the result; this only controls
    /// whether they are also serialized into the statement text.
    ///
    /// Default: `true`
    pub inline_samples: bool,

    /// Additional CSS selectors stripped before any node is rendered to text.
    ///
    /// Useful when a site starts injecting a new widget (ads, AI helpers)
    /// into the statement. Invalid selectors are ignored.
    ///
    /// Default: empty
    pub extra_noise_selectors: Vec<String>,

    /// Title used when no title candidate yields text.
    ///
    /// Default: `"Untitled"`
    pub untitled: String,

    /// Difficulty used when the page carries no difficulty signal.
    ///
    /// Default: `"unknown"`
    pub unknown_difficulty: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            status: "unsolved".to_string(),
            inline_samples: true,
            extra_noise_selectors: Vec::new(),
            untitled: "Untitled".to_string(),
            unknown_difficulty: "unknown".to_string(),
        }
    }
}

impl Options {
    /// Returns the extra noise selectors as string slices.
    #[must_use]
    pub fn extra_noise(&self) -> Vec<&str> {
        self.extra_noise_selectors.iter().map(String::as_str).collect()
    }
}
