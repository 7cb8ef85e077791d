//! The grouped, ordered view of project entries handed to presentation.
//!
//! Shape: venues in canonical order, each holding years in descending order,
//! each holding entries sorted by status rank then title. Groups are never
//! empty; a venue or year with no entries is simply absent.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entry::ProjectEntry;
use crate::enums::Venue;

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GroupedIndex {
    pub venues: Vec<VenueGroup>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct VenueGroup {
    pub venue: Venue,
    pub years: Vec<YearGroup>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct YearGroup {
    pub year: u32,
    pub entries: Vec<ProjectEntry>,
}

impl GroupedIndex {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }

    /// Total number of entries across all groups.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.iter_entries().count()
    }

    /// Entries in display order.
    pub fn iter_entries(&self) -> impl Iterator<Item = &ProjectEntry> {
        self.venues
            .iter()
            .flat_map(|venue| venue.years.iter())
            .flat_map(|year| year.entries.iter())
    }

    #[must_use]
    pub fn venue(&self, venue: Venue) -> Option<&VenueGroup> {
        self.venues.iter().find(|group| group.venue == venue)
    }
}

impl VenueGroup {
    #[must_use]
    pub fn year(&self, year: u32) -> Option<&YearGroup> {
        self.years.iter().find(|group| group.year == year)
    }
}
