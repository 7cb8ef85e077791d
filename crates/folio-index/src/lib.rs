//! # folio-index
//!
//! Builds the project index for the research wiki.
//!
//! A pass reads every content file from a [`ContentSource`], extracts the YAML
//! front section, coerces its loosely-typed fields into a [`ProjectEntry`],
//! and groups the accepted entries by venue and year. Entries missing a valid
//! venue or year are dropped; [`IndexReport::skipped`] says which and why.
//!
//! ```no_run
//! use folio_index::{FsContentSource, ProjectIndexBuilder};
//!
//! # async fn run() -> Result<(), folio_index::IndexError> {
//! let builder = ProjectIndexBuilder::new(FsContentSource::new("content/project", "mdx"));
//! let report = builder.build().await?;
//! for venue in &report.index.venues {
//!     println!("{}: {} years", venue.venue, venue.years.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [`ProjectEntry`]: folio_core::entry::ProjectEntry

pub mod builder;
pub mod coerce;
pub mod error;
pub mod frontmatter;
pub mod group;
pub mod record;
pub mod source;
pub mod walk;

pub use builder::{IndexReport, Lookup, ProjectIndexBuilder, build_index, index_records};
pub use error::IndexError;
pub use record::RawRecord;
pub use source::{ContentSource, FsContentSource, MemorySource};
