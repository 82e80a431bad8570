//! Configuration module for labelpick
//!
//! Configuration is stored as TOML in the user's config directory and can be
//! overridden per variable with `LABELPICK_*` environment variables, e.g.
//! `LABELPICK_WRAP_SUGGESTIONS=true`.

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::history::SessionOptions;
use crate::keybinds::KeybindConfig;

/// Prefix of environment overrides
pub const ENV_PREFIX: &str = "LABELPICK";

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct PickerConfig {
    /// UP/DOWN wrap around the suggestion list instead of stopping at the ends
    #[serde(default)]
    pub wrap_suggestions: bool,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Catalog used when `--catalog` is not given
    #[serde(default)]
    pub default_catalog: Option<PathBuf>,

    /// Action name to key(s)
    #[serde(default)]
    pub keybinds: KeybindConfig,
}

impl PickerConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("labelpick").join("config.toml"))
    }

    /// Load configuration from the default location, creating it if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save_to(&config_path)?;
            tracing::info!(path = %config_path.display(), "created default config");
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from `path`, applying environment overrides
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file or an override cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!(path = %path.display(), "loading config");

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Same as [`PickerConfig::save`].
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

    /// Session switches derived from this config
    #[must_use]
    pub const fn session_options(&self) -> SessionOptions {
        SessionOptions {
            wrap_suggestions: self.wrap_suggestions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keybinds::KeybindDef;

    #[test]
    fn test_default_config() {
        let config = PickerConfig::default();
        assert!(!config.wrap_suggestions);
        assert!(config.default_catalog.is_none());
        assert_eq!(config.keybinds.get("confirm"), vec!["enter"]);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = PickerConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.keybinds, KeybindConfig::default());
        assert!(config.default_catalog.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = PickerConfig {
            quiet: true,
            default_catalog: Some(PathBuf::from("/tmp/labels.toml")),
            ..Default::default()
        };
        config
            .keybinds
            .keybinds
            .insert("undo".to_string(), KeybindDef::Multiple(vec!["bspace".into(), "ctrl-z".into()]));
        config.save_to(&path).unwrap();

        let loaded = PickerConfig::load_from(&path).unwrap();
        assert!(loaded.quiet);
        assert_eq!(loaded.default_catalog, config.default_catalog);
        assert_eq!(loaded.keybinds.get("undo"), vec!["bspace", "ctrl-z"]);
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[keybinds]\nconfirm = \"ctrl-s\"\n").unwrap();

        let config = PickerConfig::load_from(&path).unwrap();
        assert_eq!(config.keybinds.get("confirm"), vec!["ctrl-s"]);
        assert_eq!(config.keybinds.get("cancel"), vec!["esc", "ctrl-c"]);
    }

    #[test]
    fn test_session_options() {
        let config = PickerConfig {
            wrap_suggestions: true,
            ..Default::default()
        };
        assert!(config.session_options().wrap_suggestions);
    }
}
