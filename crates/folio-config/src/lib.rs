//! # folio-config
//!
//! Layered configuration loading for folio using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`FOLIO_*` prefix, `__` as separator)
//! 2. Project-level `.folio/config.toml`
//! 3. User-level `~/.config/folio/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `FOLIO_CONTENT__DIR` -> `content.dir`, `FOLIO_SITE__BASE_URL` -> `site.base_url`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use folio_config::FolioConfig;
//!
//! let config = FolioConfig::load_with_dotenv().expect("config");
//! println!("content lives in {}", config.content.dir.display());
//! ```

mod content;
mod error;
mod site;

pub use content::ContentConfig;
pub use error::ConfigError;
pub use site::SiteConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub site: SiteConfig,
}

impl FolioConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading `.env` from the current directory.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".folio/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("FOLIO_").split("__"))
    }

    /// Check field-level constraints that serde defaults cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.content.validate()?;
        self.site.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("folio").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = FolioConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.content.extension, "mdx");
        assert_eq!(config.site.base_url, "/project");
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config = FolioConfig::from_figment(&FolioConfig::figment())
                .expect("should extract defaults");
            assert_eq!(config.content.dir, PathBuf::from("content/project"));
            assert_eq!(config.site.keyword_preview, 6);
            Ok(())
        });
    }
}
