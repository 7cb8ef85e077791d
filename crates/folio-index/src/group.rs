//! Grouping and ordering of accepted entries.
//!
//! Venues follow [`Venue::ALL`]; years run most recent first; entries sort by
//! status rank, then by title (byte-wise, case-sensitive), then by slug so
//! that equal titles still order the same way on every pass.

use std::collections::BTreeMap;

use folio_core::entry::ProjectEntry;
use folio_core::enums::Venue;
use folio_core::index::{GroupedIndex, VenueGroup, YearGroup};

/// Partition and sort entries into the grouped view.
#[must_use]
pub fn group_entries(entries: impl IntoIterator<Item = ProjectEntry>) -> GroupedIndex {
    let mut by_venue: BTreeMap<Venue, BTreeMap<u32, Vec<ProjectEntry>>> = BTreeMap::new();
    for entry in entries {
        by_venue
            .entry(entry.venue)
            .or_default()
            .entry(entry.year)
            .or_default()
            .push(entry);
    }

    let venues = Venue::ALL
        .into_iter()
        .filter_map(|venue| {
            let by_year = by_venue.remove(&venue)?;
            let years = by_year
                .into_iter()
                .rev()
                .map(|(year, mut entries)| {
                    sort_within_year(&mut entries);
                    YearGroup { year, entries }
                })
                .collect::<Vec<_>>();
            Some(VenueGroup { venue, years })
        })
        .collect();

    GroupedIndex { venues }
}

fn sort_within_year(entries: &mut [ProjectEntry]) {
    entries.sort_by(|a, b| {
        a.status_rank()
            .cmp(&b.status_rank())
            .then_with(|| a.title.cmp(&b.title))
            .then_with(|| a.slug.cmp(&b.slug))
    });
}
