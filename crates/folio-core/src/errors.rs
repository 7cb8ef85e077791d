//! Cross-cutting error types for folio.
//!
//! Domain-specific errors (`IndexError`, `ConfigError`) live in their own
//! crates. The binary converges everything through `anyhow`.

use thiserror::Error;

use crate::skip::SkipReason;

#[derive(Debug, Error)]
pub enum CoreError {
    /// Entry lookup returned no result.
    #[error("Entry not found: {slug}")]
    NotFound { slug: String },

    /// A file has this slug but its entry is not indexed.
    #[error("Entry {slug} is not indexed: {reason}")]
    NotIndexed { slug: String, reason: SkipReason },
}
