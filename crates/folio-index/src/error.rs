use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("content directory {} is unreadable: {source}", path.display())]
    ContentUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to enumerate {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: ignore::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid content pattern: {0}")]
    Pattern(#[from] globset::Error),

    #[error("invalid slug '{0}'")]
    InvalidSlug(String),

    #[error("read task failed: {0}")]
    Task(String),
}
