//! Result types for extraction output.
//!
//! `ProblemRecord` is the canonical record handed to the importer;
//! `ExtractionResult` wraps it (or a failure reason) together with the page URL.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Judge a record was scraped from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Codeforces,
    Atcoder,
    Leetcode,
    Luogu,
    Nowcoder,
    NowcoderPractice,
}

impl Source {
    /// Wire name, identical to the serde representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Codeforces => "codeforces",
            Self::Atcoder => "atcoder",
            Self::Leetcode => "leetcode",
            Self::Luogu => "luogu",
            Self::Nowcoder => "nowcoder",
            Self::NowcoderPractice => "nowcoder_practice",
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One sample test: 1-based index plus input and expected output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub index: u32,
    pub input: String,
    pub output: String,
}

impl Sample {
    #[must_use]
    pub fn new(index: u32, input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            index,
            input: input.into(),
            output: output.into(),
        }
    }

    /// True when neither side carries any text.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.input.is_empty() && self.output.is_empty()
    }
}

/// Normalized problem record produced by every extractor.
///
/// Field names match the importer's schema, so the record serializes as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemRecord {
    pub source: Source,

    /// Site-native identifier (`1500A`, `abc300_a`, `NC1234`, ...).
    pub id: String,

    /// Problem title, `"Untitled"` when nothing usable was found.
    pub title: String,

    /// Page URL at extraction time.
    pub url: String,

    /// Statement description followed by the serialized samples.
    pub content: String,

    pub input_format: String,
    pub output_format: String,

    /// Newline-joined limits, score and notes.
    pub constraints: String,

    pub tags: Vec<String>,

    /// Site-specific difficulty (`1200`, `easy`, ...) or `"unknown"`.
    pub difficulty: String,

    pub status: String,
    pub my_ac_code: String,
    pub my_ac_language: String,
}

/// Outcome of running one extractor against one page.
///
/// Serializes with an `ok` discriminator:
/// `{"ok": true, "url", "problem", "samples", "debug"}` or
/// `{"ok": false, "url", "reason"}`.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionResult {
    Success {
        url: String,
        problem: ProblemRecord,
        samples: Vec<Sample>,
        /// Diagnostic values; not part of any stability contract.
        debug: Map<String, Value>,
    },
    Failure {
        url: String,
        /// Judge whose extractor reported the failure; not serialized.
        source: Source,
        reason: String,
    },
}

impl ExtractionResult {
    pub(crate) fn failure(source: Source, url: &str, reason: impl Into<String>) -> Self {
        Self::Failure {
            url: url.to_string(),
            source,
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Success { url, .. } | Self::Failure { url, .. } => url,
        }
    }

    #[must_use]
    pub fn problem(&self) -> Option<&ProblemRecord> {
        match self {
            Self::Success { problem, .. } => Some(problem),
            Self::Failure { .. } => None,
        }
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        match self {
            Self::Success { samples, .. } => samples,
            Self::Failure { .. } => &[],
        }
    }

    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { reason, .. } => Some(reason),
        }
    }

    #[must_use]
    pub fn debug(&self) -> Option<&Map<String, Value>> {
        match self {
            Self::Success { debug, .. } => Some(debug),
            Self::Failure { .. } => None,
        }
    }

    /// Converts into the record, turning a failure into `Error::MissingAnchor`.
    pub fn into_result(self) -> Result<ProblemRecord> {
        match self {
            Self::Success { problem, .. } => Ok(problem),
            Self::Failure { source, reason, .. } => Err(Error::MissingAnchor {
                site: source.to_string(),
                reason,
            }),
        }
    }

    /// Serializes to the JSON shape the importer expects.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Serialize for ExtractionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Success {
                url,
                problem,
                samples,
                debug,
            } => {
                let mut map = serializer.serialize_map(Some(5))?;
                map.serialize_entry("ok", &true)?;
                map.serialize_entry("url", url)?;
                map.serialize_entry("problem", problem)?;
                map.serialize_entry("samples", samples)?;
                map.serialize_entry("debug", debug)?;
                map.end()
            }
            Self::Failure { url, reason, .. } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("ok", &false)?;
                map.serialize_entry("url", url)?;
                map.serialize_entry("reason", reason)?;
                map.end()
            }
        }
    }
}
