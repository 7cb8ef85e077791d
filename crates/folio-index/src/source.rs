//! Content sources: where raw records come from.
//!
//! The index builder only sees [`ContentSource`], so coercion and grouping
//! are testable against [`MemorySource`] without touching the filesystem.

use std::borrow::Cow;
use std::future::Future;
use std::path::{Path, PathBuf};

use tokio::task::JoinSet;

use crate::error::IndexError;
use crate::record::{RawRecord, slug_for};
use crate::walk::{extension_matcher, list_content_files};

/// Supplies one raw record per content file.
pub trait ContentSource {
    /// Enumerate and read every record. Fails only when the source as a
    /// whole cannot be read.
    fn load(&self) -> impl Future<Output = Result<Vec<RawRecord>, IndexError>> + Send;

    /// Read the single record whose slug is `slug`, if it exists.
    fn load_slug(
        &self,
        slug: &str,
    ) -> impl Future<Output = Result<Option<RawRecord>, IndexError>> + Send;
}

/// In-memory records, served as-is.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: Vec<RawRecord>,
}

impl MemorySource {
    #[must_use]
    pub const fn new(records: Vec<RawRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<RawRecord> for MemorySource {
    fn from_iter<I: IntoIterator<Item = RawRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl ContentSource for MemorySource {
    async fn load(&self) -> Result<Vec<RawRecord>, IndexError> {
        Ok(self.records.clone())
    }

    async fn load_slug(&self, slug: &str) -> Result<Option<RawRecord>, IndexError> {
        Ok(self.records.iter().find(|r| r.slug() == slug).cloned())
    }
}

/// A flat directory of `*.{extension}` files, read concurrently.
#[derive(Debug, Clone)]
pub struct FsContentSource {
    root: PathBuf,
    extension: String,
}

impl FsContentSource {
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Enumerate matching files on the blocking pool.
    async fn list_files(&self) -> Result<Vec<PathBuf>, IndexError> {
        let matcher = extension_matcher(&self.extension)?;
        let root = self.root.clone();
        tokio::task::spawn_blocking(move || list_content_files(&root, &matcher))
            .await
            .map_err(|error| IndexError::Task(error.to_string()))?
    }

    /// Invalid UTF-8 is replaced rather than rejected, so one badly encoded
    /// file cannot take the rest of the pass down with it.
    async fn read_record(path: PathBuf) -> Result<RawRecord, IndexError> {
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|source| IndexError::Read {
                path: path.clone(),
                source,
            })?;
        let text = String::from_utf8_lossy(&bytes);
        if matches!(text, Cow::Owned(_)) {
            tracing::debug!(path = %path.display(), "content file is not valid UTF-8; decoded lossily");
        }
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(RawRecord::from_text(file_name, &text))
    }
}

impl ContentSource for FsContentSource {
    async fn load(&self) -> Result<Vec<RawRecord>, IndexError> {
        let files = self.list_files().await?;
        tracing::debug!(root = %self.root.display(), files = files.len(), "reading content files");

        let mut tasks = JoinSet::new();
        for path in files {
            tasks.spawn(Self::read_record(path));
        }

        let mut records = Vec::with_capacity(tasks.len());
        while let Some(joined) = tasks.join_next().await {
            let record = joined.map_err(|error| IndexError::Task(error.to_string()))??;
            records.push(record);
        }

        // Completion order is arbitrary.
        records.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Ok(records)
    }

    async fn load_slug(&self, slug: &str) -> Result<Option<RawRecord>, IndexError> {
        let files = self.list_files().await?;
        let Some(path) = files.into_iter().find(|path| {
            path.file_name()
                .is_some_and(|name| slug_for(&name.to_string_lossy()) == slug)
        }) else {
            return Ok(None);
        };
        Self::read_record(path).await.map(Some)
    }
}
