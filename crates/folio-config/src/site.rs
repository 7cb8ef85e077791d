//! Presentation settings consumed when rendering the index.

use folio_core::entry::DEFAULT_KEYWORD_PREVIEW;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_base_url() -> String {
    "/project".to_string()
}

const fn default_keyword_preview() -> usize {
    DEFAULT_KEYWORD_PREVIEW
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    /// URL prefix for entry detail pages.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Keywords shown per entry in table output.
    #[serde(default = "default_keyword_preview")]
    pub keyword_preview: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            keyword_preview: default_keyword_preview(),
        }
    }
}

impl SiteConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.keyword_preview == 0 {
            return Err(ConfigError::InvalidValue {
                field: "site.keyword_preview".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = SiteConfig::default();
        assert_eq!(config.base_url, "/project");
        assert_eq!(config.keyword_preview, 6);
    }

    #[test]
    fn zero_preview_is_invalid() {
        let config = SiteConfig {
            keyword_preview: 0,
            ..SiteConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
