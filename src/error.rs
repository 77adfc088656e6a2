//! Error types for judge-scrape.
//!
//! Extractors themselves never fail with an `Error`: a missing statement
//! container is reported as `ExtractionResult::Failure`. The variants below
//! cover the surrounding API (routing, pattern compilation, serialization).

/// Error type for scraping operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No extractor is registered for this URL.
    #[error("no extractor available for {0}")]
    UnsupportedPage(String),

    /// The site's statement container was absent from the page.
    #[error("{site}: {reason}")]
    MissingAnchor {
        /// Site the extractor was run for.
        site: String,
        /// Extractor-provided reason naming the missing anchor.
        reason: String,
    },

    /// A heading pattern failed to compile.
    #[error("invalid heading pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Result serialization failed.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for scraping operations.
pub type Result<T> = std::result::Result<T, Error>;
