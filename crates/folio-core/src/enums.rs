//! Publication venues and statuses for project entries.
//!
//! Both sets are closed. Venues serialize in their canonical display form
//! (`"CVPR"`, `"ICML"`, `"NeurIPS"`); statuses serialize in lowercase.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Venue
// ---------------------------------------------------------------------------

/// Publication venue of a project entry.
///
/// Declaration order is the canonical display order, so the derived `Ord`
/// sorts venues the way the index emits them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum Venue {
    #[serde(rename = "CVPR")]
    Cvpr,
    #[serde(rename = "ICML")]
    Icml,
    #[serde(rename = "NeurIPS")]
    NeurIps,
}

impl Venue {
    /// Every venue, in canonical order.
    pub const ALL: [Self; 3] = [Self::Cvpr, Self::Icml, Self::NeurIps];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cvpr => "CVPR",
            Self::Icml => "ICML",
            Self::NeurIps => "NeurIPS",
        }
    }

    /// Parse a hand-authored venue: surrounding whitespace is ignored and the
    /// comparison is made on upper-cased forms, so `cvpr`, `Cvpr` and
    /// `neurips` all resolve to their canonical variant.
    #[must_use]
    pub fn parse_loose(raw: &str) -> Option<Self> {
        let upper = raw.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|venue| venue.as_str().to_uppercase() == upper)
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Sort rank of an entry that carries no status.
pub const UNSPECIFIED_RANK: u8 = 9;

/// Publication status of a project entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Accepted,
    Submitted,
    Draft,
}

impl Status {
    /// Accept only the exact lowercase literals. Anything else is "no status".
    #[must_use]
    pub fn parse_exact(raw: &str) -> Option<Self> {
        match raw {
            "accepted" => Some(Self::Accepted),
            "submitted" => Some(Self::Submitted),
            "draft" => Some(Self::Draft),
            _ => None,
        }
    }

    /// Primary sort key within a year group.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Accepted => 0,
            Self::Submitted => 1,
            Self::Draft => 2,
        }
    }

    /// Rank of an optional status; absent ranks after every known status.
    #[must_use]
    pub fn rank_of(status: Option<Self>) -> u8 {
        status.map_or(UNSPECIFIED_RANK, Self::rank)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::Submitted => "submitted",
            Self::Draft => "draft",
        }
    }

    /// Label shown on index cards.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Accepted => "Accepted",
            Self::Submitted => "Submitted",
            Self::Draft => "Draft",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
