//! Front-section extraction for content files.
//!
//! A file starts with a front section when its first line is exactly `---`.
//! The section runs to the next line that is exactly `---`; everything after
//! that line is the body. Trailing `\r` is ignored on delimiter lines. A file
//! with an opening delimiter but no closing one has no front section.

use serde_json::{Map, Value};

/// Parsed front section of one file.
#[derive(Debug, Clone, PartialEq)]
pub enum Frontmatter {
    /// A string-keyed mapping with arbitrary value types.
    Fields(Map<String, Value>),
    /// The section exists but is not a YAML mapping.
    Malformed(String),
}

impl Frontmatter {
    #[must_use]
    pub fn empty() -> Self {
        Self::Fields(Map::new())
    }
}

/// Split `text` into its raw front section (if any) and body.
#[must_use]
pub fn split_frontmatter(text: &str) -> (Option<&str>, &str) {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut lines = text.split_inclusive('\n');
    let Some(first) = lines.next() else {
        return (None, text);
    };
    if !is_delimiter(first) {
        return (None, text);
    }

    let start = first.len();
    let mut offset = start;
    for line in lines {
        if is_delimiter(line) {
            let yaml = &text[start..offset];
            let body = &text[offset + line.len()..];
            return (Some(yaml), body);
        }
        offset += line.len();
    }

    (None, text)
}

/// Parse a raw front section into a mapping.
#[must_use]
pub fn parse_frontmatter(yaml: &str) -> Frontmatter {
    if yaml.trim().is_empty() {
        return Frontmatter::empty();
    }

    match serde_yaml::from_str::<Value>(yaml) {
        Ok(Value::Object(map)) => Frontmatter::Fields(map),
        Ok(Value::Null) => Frontmatter::empty(),
        Ok(_) => Frontmatter::Malformed("expected a key/value mapping".to_string()),
        Err(error) => Frontmatter::Malformed(error.to_string()),
    }
}

/// Split and parse in one step, returning the body alongside.
#[must_use]
pub fn extract(text: &str) -> (Frontmatter, &str) {
    match split_frontmatter(text) {
        (Some(yaml), body) => (parse_frontmatter(yaml), body),
        (None, body) => (Frontmatter::empty(), body),
    }
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end_matches(['\n', '\r']) == "---"
}
