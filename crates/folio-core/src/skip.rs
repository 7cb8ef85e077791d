//! Diagnostic records for entries dropped during indexing.
//!
//! Dropping is silent as far as the grouped index is concerned; these records
//! are a side-channel so authoring mistakes in frontmatter can be surfaced.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why an entry was excluded from the index.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum SkipReason {
    /// No `venue` key, or an explicit null.
    MissingVenue,
    /// A venue outside the known set, or one that is not a string.
    UnknownVenue(String),
    /// No `year` key, or an explicit null.
    MissingYear,
    /// A year that is not a positive base-10 integer.
    InvalidYear(String),
    /// The front section was present but could not be read as a mapping.
    MalformedFrontmatter(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingVenue => f.write_str("missing venue"),
            Self::UnknownVenue(raw) => write!(f, "unknown venue '{raw}'"),
            Self::MissingYear => f.write_str("missing year"),
            Self::InvalidYear(raw) => write!(f, "invalid year '{raw}'"),
            Self::MalformedFrontmatter(msg) => write!(f, "malformed frontmatter: {msg}"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SkippedEntry {
    pub slug: String,
    pub reason: SkipReason,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_raw_value() {
        assert_eq!(
            SkipReason::InvalidYear("not-a-year".into()).to_string(),
            "invalid year 'not-a-year'"
        );
        assert_eq!(SkipReason::MissingVenue.to_string(), "missing venue");
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(SkipReason::UnknownVenue("ICLR".into())).unwrap();
        assert_eq!(json["kind"], "unknown_venue");
        assert_eq!(json["detail"], "ICLR");
    }
}
