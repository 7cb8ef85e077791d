//! Field-level coercion from untyped frontmatter to a [`ProjectEntry`].
//!
//! Each field is coerced independently. Only `venue` and `year` are required;
//! a bad optional field degrades to its fallback and never drops the entry.

use folio_core::entry::{Links, ONE_LINE_PLACEHOLDER, ProjectEntry};
use folio_core::enums::{Status, Venue};
use folio_core::skip::SkipReason;
use serde_json::{Map, Value};

pub fn coerce_venue(value: Option<&Value>) -> Result<Venue, SkipReason> {
    match value {
        None | Some(Value::Null) => Err(SkipReason::MissingVenue),
        Some(Value::String(raw)) => {
            Venue::parse_loose(raw).ok_or_else(|| SkipReason::UnknownVenue(raw.clone()))
        }
        Some(other) => Err(SkipReason::UnknownVenue(other.to_string())),
    }
}

/// Accept an integral number or a base-10 integer string, positive and
/// within `u32`. Fractional values are rejected, never rounded.
pub fn coerce_year(value: Option<&Value>) -> Result<u32, SkipReason> {
    match value {
        None | Some(Value::Null) => Err(SkipReason::MissingYear),
        Some(Value::Number(number)) => {
            year_from_number(number).ok_or_else(|| SkipReason::InvalidYear(number.to_string()))
        }
        Some(Value::String(raw)) => raw
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|year| *year > 0)
            .ok_or_else(|| SkipReason::InvalidYear(raw.clone())),
        Some(other) => Err(SkipReason::InvalidYear(other.to_string())),
    }
}

fn year_from_number(number: &serde_json::Number) -> Option<u32> {
    if let Some(int) = number.as_u64() {
        return u32::try_from(int).ok().filter(|year| *year > 0);
    }
    if number.is_i64() {
        return None;
    }
    let float = number.as_f64()?;
    if !float.is_finite() || float.fract() != 0.0 || float < 1.0 || float > f64::from(u32::MAX) {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Some(float as u32)
}

#[must_use]
pub fn coerce_status(value: Option<&Value>) -> Option<Status> {
    value.and_then(Value::as_str).and_then(Status::parse_exact)
}

/// A sequence keeps its string elements; a string is split on commas,
/// trimmed, and emptied of blank pieces. An empty result is absent.
#[must_use]
pub fn coerce_keywords(value: Option<&Value>) -> Option<Vec<String>> {
    let keywords: Vec<String> = match value? {
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        Value::String(raw) => raw
            .split(',')
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(str::to_string)
            .collect(),
        _ => return None,
    };
    (!keywords.is_empty()).then_some(keywords)
}

#[must_use]
pub fn coerce_links(value: Option<&Value>) -> Option<Links> {
    let object = value?.as_object()?;
    let pick = |key: &str| object.get(key).and_then(Value::as_str).map(str::to_string);
    Links::new(pick("paper"), pick("code"), pick("slides"))
}

fn string_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Coerce one record. `slug` doubles as the title fallback.
pub fn coerce_entry(slug: &str, fields: &Map<String, Value>) -> Result<ProjectEntry, SkipReason> {
    let venue = coerce_venue(fields.get("venue"))?;
    let year = coerce_year(fields.get("year"))?;

    let title = string_field(fields, "title").unwrap_or_else(|| slug.to_string());
    let one_line = string_field(fields, "oneLine")
        .or_else(|| string_field(fields, "description"))
        .unwrap_or_else(|| ONE_LINE_PLACEHOLDER.to_string());

    Ok(ProjectEntry {
        venue,
        year,
        title,
        slug: slug.to_string(),
        one_line,
        status: coerce_status(fields.get("status")),
        track: string_field(fields, "track"),
        keywords: coerce_keywords(fields.get("keywords")),
        links: coerce_links(fields.get("links")),
    })
}
