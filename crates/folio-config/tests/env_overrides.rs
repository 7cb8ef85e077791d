use std::path::PathBuf;

use figment::Jail;
use folio_config::FolioConfig;

#[test]
fn env_vars_fill_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("FOLIO_CONTENT__DIR", "/srv/wiki/project");
        jail.set_env("FOLIO_CONTENT__EXTENSION", "md");
        jail.set_env("FOLIO_SITE__KEYWORD_PREVIEW", "4");

        let config = FolioConfig::load().expect("config loads");
        assert_eq!(config.content.dir, PathBuf::from("/srv/wiki/project"));
        assert_eq!(config.content.extension, "md");
        assert_eq!(config.site.keyword_preview, 4);
        Ok(())
    });
}

#[test]
fn env_var_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".folio")?;
        jail.create_file(".folio/config.toml", "[site]\nbase_url = \"/file\"\n")?;
        jail.set_env("FOLIO_SITE__BASE_URL", "/env");

        let config = FolioConfig::load().expect("config loads");
        assert_eq!(config.site.base_url, "/env");
        Ok(())
    });
}

#[test]
fn zero_keyword_preview_from_env_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("FOLIO_SITE__KEYWORD_PREVIEW", "0");
        assert!(FolioConfig::load().is_err());
        Ok(())
    });
}
