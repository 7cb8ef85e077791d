use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Status, Venue};

/// Placeholder summary for entries with neither `oneLine` nor `description`.
pub const ONE_LINE_PLACEHOLDER: &str = "—";

/// Number of keywords an index card shows.
pub const DEFAULT_KEYWORD_PREVIEW: usize = 6;

/// External links attached to a project entry.
///
/// Built only through [`Links::new`], which refuses to produce a value with
/// every field absent.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Links {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slides: Option<String>,
}

impl Links {
    /// Empty strings count as absent. Returns `None` when nothing remains.
    #[must_use]
    pub fn new(paper: Option<String>, code: Option<String>, slides: Option<String>) -> Option<Self> {
        let keep = |value: Option<String>| value.filter(|s| !s.is_empty());
        let links = Self {
            paper: keep(paper),
            code: keep(code),
            slides: keep(slides),
        };
        if links.paper.is_none() && links.code.is_none() && links.slides.is_none() {
            return None;
        }
        Some(links)
    }
}

/// One normalized project, derived from a single content file.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectEntry {
    pub venue: Venue,
    pub year: u32,
    pub title: String,
    /// File name without its extension; unique within the content directory.
    pub slug: String,
    pub one_line: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

impl ProjectEntry {
    /// Address of the entry's detail page under `base_url`.
    #[must_use]
    pub fn href(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.slug)
    }

    /// At most the first `limit` keywords.
    #[must_use]
    pub fn keyword_preview(&self, limit: usize) -> &[String] {
        match self.keywords.as_deref() {
            Some(keywords) => &keywords[..keywords.len().min(limit)],
            None => &[],
        }
    }

    #[must_use]
    pub fn status_rank(&self) -> u8 {
        Status::rank_of(self.status)
    }
}

/// A single entry together with the content that follows its front section.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectDocument {
    pub entry: ProjectEntry,
    pub body: String,
}
