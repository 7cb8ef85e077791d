use anyhow::Context;
use folio_core::enums::Venue;
use folio_core::index::{GroupedIndex, VenueGroup};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::IndexArgs;
use crate::context::AppContext;
use crate::output::{Tabular, output};

#[derive(Debug, Serialize)]
struct IndexResponse {
    entries: usize,
    skipped: usize,
    base_url: String,
    venues: Vec<VenueGroup>,
    #[serde(skip)]
    keyword_preview: usize,
}

impl Tabular for IndexResponse {
    fn headers(&self) -> Vec<&'static str> {
        vec!["venue", "year", "title", "status", "track", "keywords", "href"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        let mut rows = Vec::with_capacity(self.entries);
        for venue in &self.venues {
            for year in &venue.years {
                for entry in &year.entries {
                    rows.push(vec![
                        venue.venue.to_string(),
                        year.year.to_string(),
                        entry.title.clone(),
                        entry.status.map_or_else(|| "-".to_string(), |s| s.to_string()),
                        entry.track.clone().unwrap_or_else(|| "-".to_string()),
                        entry.keyword_preview(self.keyword_preview).join(", "),
                        entry.href(&self.base_url),
                    ]);
                }
            }
        }
        rows
    }
}

/// Handle `folio index`.
pub async fn handle(args: &IndexArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let venue = args
        .venue
        .as_deref()
        .map(|raw| {
            Venue::parse_loose(raw).with_context(|| {
                format!("unknown venue '{raw}' (expected one of CVPR, ICML, NeurIPS)")
            })
        })
        .transpose()?;

    let report = ctx
        .builder
        .build()
        .await
        .context("failed to build project index")?;

    if !report.skipped.is_empty() {
        tracing::warn!(
            skipped = report.skipped.len(),
            "some content files were left out of the index; run `folio check` for details"
        );
    }

    let index = filter_venue(report.index, venue);
    let response = IndexResponse {
        entries: index.entry_count(),
        skipped: report.skipped.len(),
        base_url: ctx.config.site.base_url.clone(),
        venues: index.venues,
        keyword_preview: ctx.config.site.keyword_preview,
    };
    output(&response, flags)
}

fn filter_venue(index: GroupedIndex, venue: Option<Venue>) -> GroupedIndex {
    let Some(venue) = venue else {
        return index;
    };
    GroupedIndex {
        venues: index
            .venues
            .into_iter()
            .filter(|group| group.venue == venue)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use folio_core::entry::ProjectEntry;
    use folio_core::enums::{Status, Venue};
    use folio_core::index::{GroupedIndex, VenueGroup, YearGroup};

    use super::{IndexResponse, filter_venue};
    use crate::output::Tabular;

    fn index() -> GroupedIndex {
        let entry = |venue, title: &str| ProjectEntry {
            venue,
            year: 2024,
            title: title.to_string(),
            slug: title.to_lowercase(),
            one_line: String::new(),
            status: Some(Status::Accepted),
            track: None,
            keywords: Some((0..9).map(|i| format!("k{i}")).collect()),
            links: None,
        };
        GroupedIndex {
            venues: vec![
                VenueGroup {
                    venue: Venue::Cvpr,
                    years: vec![YearGroup {
                        year: 2024,
                        entries: vec![entry(Venue::Cvpr, "A")],
                    }],
                },
                VenueGroup {
                    venue: Venue::Icml,
                    years: vec![YearGroup {
                        year: 2024,
                        entries: vec![entry(Venue::Icml, "B")],
                    }],
                },
            ],
        }
    }

    #[test]
    fn venue_filter_keeps_one_group() {
        let filtered = filter_venue(index(), Some(Venue::Icml));
        assert_eq!(filtered.venues.len(), 1);
        assert_eq!(filtered.venues[0].venue, Venue::Icml);
        assert_eq!(filter_venue(index(), None).venues.len(), 2);
    }

    #[test]
    fn rows_flatten_with_href_and_keyword_preview() {
        let index = index();
        let response = IndexResponse {
            entries: index.entry_count(),
            skipped: 0,
            base_url: "/project".to_string(),
            venues: index.venues,
            keyword_preview: 6,
        };
        let rows = response.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], "CVPR");
        assert_eq!(rows[0][3], "accepted");
        assert_eq!(rows[0][4], "-");
        assert_eq!(rows[0][5].split(", ").count(), 6);
        assert_eq!(rows[0][6], "/project/a");
    }
}
