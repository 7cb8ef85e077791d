//! `ProjectIndexBuilder`: one indexing pass from a content source to the
//! grouped view.
//!
//! Every pass rebuilds the entries from scratch. Nothing is cached between
//! passes and the source is never written to.

use folio_core::entry::{ProjectDocument, ProjectEntry};
use folio_core::index::GroupedIndex;
use folio_core::skip::{SkipReason, SkippedEntry};
use serde::Serialize;

use crate::coerce::coerce_entry;
use crate::error::IndexError;
use crate::frontmatter::Frontmatter;
use crate::group::group_entries;
use crate::record::RawRecord;
use crate::source::ContentSource;

/// Grouped index plus the entries that did not make it in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IndexReport {
    pub index: GroupedIndex,
    pub skipped: Vec<SkippedEntry>,
}

/// Coerce one raw record, reporting why it was dropped if it was.
pub fn coerce_record(record: &RawRecord) -> Result<ProjectEntry, SkipReason> {
    match &record.frontmatter {
        Frontmatter::Fields(fields) => coerce_entry(&record.slug(), fields),
        Frontmatter::Malformed(message) => Err(SkipReason::MalformedFrontmatter(message.clone())),
    }
}

/// Build the grouped index and collect diagnostics for dropped entries.
pub fn index_records<'a>(records: impl IntoIterator<Item = &'a RawRecord>) -> IndexReport {
    let mut entries = Vec::new();
    let mut skipped = Vec::new();

    for record in records {
        match coerce_record(record) {
            Ok(entry) => entries.push(entry),
            Err(reason) => {
                let slug = record.slug();
                tracing::debug!(%slug, %reason, "skipping project entry");
                skipped.push(SkippedEntry { slug, reason });
            }
        }
    }

    skipped.sort_by(|a, b| a.slug.cmp(&b.slug));
    IndexReport {
        index: group_entries(entries),
        skipped,
    }
}

/// Build the grouped index. Invalid entries are dropped without a trace.
pub fn build_index<'a>(records: impl IntoIterator<Item = &'a RawRecord>) -> GroupedIndex {
    index_records(records).index
}

/// What a slug lookup found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(ProjectDocument),
    /// A file has this slug but its entry is left out of the index.
    Skipped(SkipReason),
    Missing,
}

impl Lookup {
    #[must_use]
    pub fn into_document(self) -> Option<ProjectDocument> {
        match self {
            Self::Found(document) => Some(document),
            Self::Skipped(_) | Self::Missing => None,
        }
    }
}

pub struct ProjectIndexBuilder<S> {
    source: S,
}

impl<S: ContentSource> ProjectIndexBuilder<S> {
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Run one indexing pass over the source.
    pub async fn build(&self) -> Result<IndexReport, IndexError> {
        let records = self.source.load().await?;
        let report = index_records(&records);
        tracing::info!(
            files = records.len(),
            entries = report.index.entry_count(),
            skipped = report.skipped.len(),
            "built project index"
        );
        Ok(report)
    }

    /// Find the entry for `slug` together with its body.
    ///
    /// Only entries that would appear in the index are found; a file whose
    /// entry is dropped reports why.
    pub async fn lookup(&self, slug: &str) -> Result<Lookup, IndexError> {
        validate_slug(slug)?;
        let Some(record) = self.source.load_slug(slug).await? else {
            return Ok(Lookup::Missing);
        };
        match coerce_record(&record) {
            Ok(entry) => Ok(Lookup::Found(ProjectDocument {
                entry,
                body: record.body,
            })),
            Err(reason) => {
                tracing::debug!(%slug, %reason, "lookup hit an invalid entry");
                Ok(Lookup::Skipped(reason))
            }
        }
    }
}

fn validate_slug(slug: &str) -> Result<(), IndexError> {
    if slug.is_empty() || slug.starts_with('.') || slug.contains(['/', '\\']) {
        return Err(IndexError::InvalidSlug(slug.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemorySource;
    use folio_core::enums::Venue;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn source() -> MemorySource {
        MemorySource::new(vec![
            RawRecord::from_json("good.mdx", json!({"venue": "cvpr", "year": "2024", "title": "X"})),
            RawRecord::from_json("bad-year.mdx", json!({"venue": "cvpr", "year": "not-a-year"})),
            RawRecord::from_json("no-venue.mdx", json!({"year": 2024})),
            RawRecord::from_text("broken.mdx", "---\n: [\n---\n"),
        ])
    }

    #[tokio::test]
    async fn build_reports_skipped_entries() {
        let report = ProjectIndexBuilder::new(source()).build().await.unwrap();

        assert_eq!(report.index.entry_count(), 1);
        let entry = report.index.iter_entries().next().unwrap();
        assert_eq!(entry.venue, Venue::Cvpr);
        assert_eq!(entry.year, 2024);

        let skipped: Vec<&str> = report.skipped.iter().map(|s| s.slug.as_str()).collect();
        assert_eq!(skipped, vec!["bad-year", "broken", "no-venue"]);
        assert_eq!(
            report.skipped[0].reason,
            SkipReason::InvalidYear("not-a-year".into())
        );
        assert!(matches!(
            report.skipped[1].reason,
            SkipReason::MalformedFrontmatter(_)
        ));
        assert_eq!(report.skipped[2].reason, SkipReason::MissingVenue);
    }

    #[tokio::test]
    async fn building_twice_is_identical() {
        let builder = ProjectIndexBuilder::new(source());
        let first = builder.build().await.unwrap();
        let second = builder.build().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn lookup_returns_valid_document() {
        let builder = ProjectIndexBuilder::new(MemorySource::new(vec![RawRecord::from_text(
            "nerf.mdx",
            "---\nvenue: ICML\nyear: 2023\n---\nBody text\n",
        )]));

        let doc = builder
            .lookup("nerf")
            .await
            .unwrap()
            .into_document()
            .expect("found");
        assert_eq!(doc.entry.slug, "nerf");
        assert_eq!(doc.body, "Body text\n");
        assert_eq!(builder.lookup("missing").await.unwrap(), Lookup::Missing);
    }

    #[tokio::test]
    async fn lookup_of_invalid_entry_reports_reason() {
        let builder = ProjectIndexBuilder::new(source());
        assert_eq!(
            builder.lookup("bad-year").await.unwrap(),
            Lookup::Skipped(SkipReason::InvalidYear("not-a-year".into()))
        );
        assert_eq!(
            builder.lookup("no-venue").await.unwrap(),
            Lookup::Skipped(SkipReason::MissingVenue)
        );
    }

    #[tokio::test]
    async fn lookup_rejects_path_like_slugs() {
        let builder = ProjectIndexBuilder::new(source());
        for slug in ["", "../etc/passwd", "a/b", ".hidden", "a\\b"] {
            assert!(matches!(
                builder.lookup(slug).await,
                Err(IndexError::InvalidSlug(_))
            ));
        }
    }

    #[test]
    fn build_index_drops_without_report() {
        let records = [
            RawRecord::from_json("a.mdx", json!({"venue": "ICML", "year": 2022})),
            RawRecord::from_json("b.mdx", json!({"venue": "ICLR", "year": 2022})),
        ];
        let index = build_index(&records);
        assert_eq!(index.entry_count(), 1);
    }
}
