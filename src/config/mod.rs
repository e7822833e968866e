//! Configuration module for repocat
//!
//! Manages default page size, default sort and the default catalog data
//! files. Configuration is stored in the user's config directory and can be
//! overridden with `REPOCAT_*` environment variables.

use crate::browse::{BrowseParams, SortKey};
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RepocatConfig {
    /// Results per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Default browse sort order
    #[serde(default = "default_sort")]
    pub sort: SortKey,

    /// Repository list used when none is given on the command line
    #[serde(default)]
    pub repos_path: Option<PathBuf>,

    /// Facet list used when none is given on the command line
    #[serde(default)]
    pub facets_path: Option<PathBuf>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

const fn default_page_size() -> usize {
    BrowseParams::DEFAULT_PAGE_SIZE
}

const fn default_sort() -> SortKey {
    SortKey::DataQuality
}

impl Default for RepocatConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            sort: default_sort(),
            repos_path: None,
            facets_path: None,
            quiet: false,
        }
    }
}

impl RepocatConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("repocat").join("config.toml"))
    }

    /// Load configuration from the default location, creating it if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_or_create(&Self::config_path()?, Self::environment())
    }

    /// Load configuration from a specific file, applying environment overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with_env(path, Self::environment())
    }

    /// `REPOCAT_*` variables, e.g. `REPOCAT_PAGE_SIZE=25`
    fn environment() -> Environment {
        Environment::with_prefix("REPOCAT").try_parsing(true)
    }

    /// Write defaults if `path` is missing, then load it with overrides
    fn load_or_create(path: &Path, env: Environment) -> Result<Self, ConfigError> {
        if !path.exists() {
            Self::default().save_to(path)?;
            tracing::debug!(path = %path.display(), "created default configuration");
        }
        Self::load_with_env(path, env)
    }

    fn load_with_env(path: &Path, env: Environment) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .add_source(env)
            .build()?;

        let config: Self = settings.try_deserialize()?;
        tracing::debug!(path = %path.display(), ?config, "configuration loaded");
        Ok(config)
    }

    /// Save configuration to a specific file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Browse parameters on page 1 with the configured size and sort
    #[must_use]
    pub fn browse_params(&self) -> BrowseParams {
        BrowseParams::new(1, self.page_size, Some(self.sort))
    }
}
