//! # folio-core
//!
//! Core types and error types for the folio research wiki.
//!
//! This crate provides the foundational types shared across all folio crates:
//! - Closed enums for publication venues and statuses
//! - The normalized project entry record
//! - The grouped venue/year index handed to presentation
//! - Diagnostic records for entries dropped during indexing
//! - Cross-cutting error types

pub mod entry;
pub mod enums;
pub mod errors;
pub mod index;
pub mod skip;
