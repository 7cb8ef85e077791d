use folio_config::FolioConfig;
use folio_index::{FsContentSource, ProjectIndexBuilder};

/// Everything a command handler needs: resolved config and the index builder.
pub struct AppContext {
    pub config: FolioConfig,
    pub builder: ProjectIndexBuilder<FsContentSource>,
}

impl AppContext {
    #[must_use]
    pub fn new(config: FolioConfig) -> Self {
        let source = FsContentSource::new(&config.content.dir, &config.content.extension);
        tracing::debug!(
            dir = %config.content.dir.display(),
            extension = %config.content.extension,
            "content source configured"
        );
        Self {
            config,
            builder: ProjectIndexBuilder::new(source),
        }
    }
}
