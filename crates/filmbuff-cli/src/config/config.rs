//! `AppConfig` struct and the `[movie_api_config]` TOML store.

use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use filmbuff_api::movie_api::MovieApiConfig;

/// Name of the table holding the movie API settings.
pub const CONFIG_NAME: &str = "movie_api_config";

/// Top-level application configuration.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Movie API connection settings, stored under [`CONFIG_NAME`].
    pub movie_api_config: MovieApiConfig,
}

/// What a config file holds for the movie API settings.
#[derive(Debug, PartialEq, Eq)]
pub enum StoredConfig {
    /// The file does not exist.
    NoFile,
    /// The file exists but has no [`CONFIG_NAME`] table.
    NoTable,
    /// Settings read from the [`CONFIG_NAME`] table.
    Settings(MovieApiConfig),
}

impl AppConfig {
    /// Reads the [`CONFIG_NAME`] table from `path`.
    ///
    /// Other tables in the file are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, is not valid
    /// TOML, or its [`CONFIG_NAME`] entry is not a table of strings.
    pub fn read(path: &Path) -> Result<StoredConfig> {
        let Some(mut document) = read_document(path)? else {
            return Ok(StoredConfig::NoFile);
        };
        let Some(table) = document.remove(CONFIG_NAME) else {
            return Ok(StoredConfig::NoTable);
        };
        let settings = table
            .try_into::<MovieApiConfig>()
            .with_context(|| format!("[{CONFIG_NAME}] in {} is invalid", path.display()))?;
        Ok(StoredConfig::Settings(settings))
    }

    /// Loads the settings, falling back to empty values.
    ///
    /// A missing file is normal before the first `config set`; a file
    /// without the [`CONFIG_NAME`] table is logged as a warning.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::read`].
    pub fn load(path: &Path) -> Result<Self> {
        let movie_api_config = match Self::read(path)? {
            StoredConfig::Settings(settings) => settings,
            StoredConfig::NoFile => {
                tracing::debug!(path = %path.display(), "config file not found, settings are empty");
                MovieApiConfig::default()
            }
            StoredConfig::NoTable => {
                tracing::warn!(
                    path = %path.display(),
                    "config file has no [{CONFIG_NAME}] table, settings are empty"
                );
                MovieApiConfig::default()
            }
        };
        Ok(Self { movie_api_config })
    }

    /// Writes the settings into the [`CONFIG_NAME`] table of `path`.
    ///
    /// Other tables already in the file are kept. Parent directories are
    /// created as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the existing file cannot be parsed, or if
    /// directory creation or the write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut document = read_document(path)?.unwrap_or_default();
        let settings = toml::Value::try_from(&self.movie_api_config)
            .context("failed to serialize movie API settings")?;
        document.insert(String::from(CONFIG_NAME), settings);

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(&document).context("failed to serialize config")?;
        std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
    }
}

/// Parses the whole config file, or `None` when it does not exist.
fn read_document(path: &Path) -> Result<Option<toml::Table>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e).with_context(|| format!("failed to read {}", path.display())),
    };
    toml::from_str(&content)
        .map(Some)
        .with_context(|| format!("failed to parse {}", path.display()))
}
