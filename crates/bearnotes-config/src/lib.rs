use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod tags;

pub use tags::{HandlingStrategy, TagCatalog, TagOptions, normalize_tag_name};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to read tag file at {tag_file}: {source}")]
    TagFileReadError {
        tag_file: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse tag file at {tag_file}: {source}")]
    TagFileParseError {
        tag_file: PathBuf,
        source: serde_yaml::Error,
    },
}

/// Default locations used by the CLI when a flag is not given.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the exported Bear notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes_path: Option<PathBuf>,
    /// Tag configuration file written by discovery and read by migration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_file: Option<PathBuf>,
    /// Directory receiving the migrated notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_path: Option<PathBuf>,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in every configured path
        for path in [
            &mut config.notes_path,
            &mut config.tag_file,
            &mut config.output_path,
        ]
        .into_iter()
        .flatten()
        {
            if let Some(expanded) = Self::expand_path(path.as_path()) {
                *path = expanded;
            }
        }

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/bearnotes");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
