use std::path::Path;

use serde_json::{Map, Value};

use crate::frontmatter::{self, Frontmatter};

/// One content file before coercion: its name, untyped metadata, and body.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    pub file_name: String,
    pub frontmatter: Frontmatter,
    pub body: String,
}

impl RawRecord {
    /// Build a record from already-parsed fields.
    #[must_use]
    pub fn new(file_name: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            file_name: file_name.into(),
            frontmatter: Frontmatter::Fields(fields),
            body: String::new(),
        }
    }

    /// Build a record from a file's full text.
    #[must_use]
    pub fn from_text(file_name: impl Into<String>, text: &str) -> Self {
        let (frontmatter, body) = frontmatter::extract(text);
        Self {
            file_name: file_name.into(),
            frontmatter,
            body: body.to_string(),
        }
    }

    /// Build a record from a JSON object literal; non-objects yield no fields.
    #[must_use]
    pub fn from_json(file_name: impl Into<String>, value: Value) -> Self {
        match value {
            Value::Object(map) => Self::new(file_name, map),
            _ => Self::new(file_name, Map::new()),
        }
    }

    /// File name with its final extension removed.
    #[must_use]
    pub fn slug(&self) -> String {
        slug_for(&self.file_name)
    }
}

/// Derive a slug from a file name by removing its final extension.
#[must_use]
pub fn slug_for(file_name: &str) -> String {
    Path::new(file_name)
        .file_stem()
        .map_or_else(|| file_name.to_string(), |stem| stem.to_string_lossy().into_owned())
}
