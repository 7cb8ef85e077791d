//! Content directory configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ConfigError;

fn default_dir() -> PathBuf {
    PathBuf::from("content/project")
}

fn default_extension() -> String {
    "mdx".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentConfig {
    /// Directory holding one file per project, relative to the working directory.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    /// File extension (without the dot) that marks a project file.
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            extension: default_extension(),
        }
    }
}

impl ContentConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "content.dir".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.extension.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "content.extension".into(),
                reason: "must not be empty".into(),
            });
        }
        if let Some(bad) = self
            .extension
            .chars()
            .find(|ch| matches!(ch, '.' | '*' | '?' | '[' | ']' | '{' | '}' | '/' | '\\'))
        {
            return Err(ConfigError::InvalidValue {
                field: "content.extension".into(),
                reason: format!("must be a bare extension without '{bad}'"),
            });
        }
        Ok(())
    }
}
