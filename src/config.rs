// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{RepositoryError, Result};
use crate::repository::{FileRepository, Layout, TranslationCacheMode};
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub store: StoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    pub root: PathBuf,
    pub default_language: String,
    #[serde(default)]
    pub translation_cache: TranslationCacheMode,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub verbose: bool,
    pub color: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            color: true,
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("GEO_REPOSITORY")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| RepositoryError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| RepositoryError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            store: StoreConfig {
                root: PathBuf::from("./data"),
                default_language: "en".to_string(),
                translation_cache: TranslationCacheMode::PerSource,
            },
            logging: LoggingConfig::default(),
        }
    }

    /// Repository over the configured root with the standard layout.
    pub fn repository(&self) -> FileRepository {
        FileRepository::with_cache_mode(
            &self.store.root,
            Arc::new(Layout::standard()),
            self.store.translation_cache,
        )
    }

    fn validate(&self) -> Result<()> {
        if self.store.root.as_os_str().is_empty() {
            return Err(RepositoryError::Config(
                "store.root must not be empty".to_string(),
            ));
        }

        Validator::validate_language(&self.store.default_language)
            .map_err(|e| RepositoryError::Config(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");
        fs::write(
            &path,
            r#"
[store]
root = "/srv/geo"
default_language = "ru"
translation_cache = "first_load_only"

[logging]
verbose = true
color = false
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.store.root, PathBuf::from("/srv/geo"));
        assert_eq!(config.store.default_language, "ru");
        assert_eq!(
            config.store.translation_cache,
            TranslationCacheMode::FirstLoadOnly
        );
        assert!(config.logging.verbose);
        assert!(!config.logging.color);
    }

    #[test]
    fn test_optional_sections_default() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");
        fs::write(
            &path,
            "[store]\nroot = \"data\"\ndefault_language = \"en\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.store.translation_cache, TranslationCacheMode::PerSource);
        assert!(config.logging.color);
    }

    #[test]
    fn test_invalid_language_is_rejected() {
        let mut config = Config::default_config();
        config.store.default_language = "English".to_string();
        assert!(matches!(config.validate(), Err(RepositoryError::Config(_))));
    }

    #[test]
    fn test_default_config_builds_repository() {
        let config = Config::default_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.repository().prefix(), Path::new("./data"));
    }
}
