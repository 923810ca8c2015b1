use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::fs::atomic_write;
use crate::paths;
use crate::translation::TranslatorConfig;

/// Default settings in the `[trans]` section of config.toml.
///
/// Every key is optional; unset keys fall back to the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransConfig {
    /// Default source language code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// Default target language code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// Request timeout in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    /// Translation endpoint URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// User-Agent header sent with every request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/trans/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub trans: TransConfig,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub from: Option<String>,
    pub to: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid endpoint URL '{value}': {reason}")]
    InvalidEndpoint { value: String, reason: String },

    #[error("Invalid timeout: must be at least 1 second")]
    ZeroTimeout,
}

/// Merges CLI options, config file settings and built-in defaults, in that
/// order of priority, into the settings the translator runs with.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<TranslatorConfig, ConfigError> {
    let defaults = TranslatorConfig::default();
    let file = &config_file.trans;

    let endpoint = match &file.endpoint {
        Some(raw) => parse_endpoint(raw)?,
        None => defaults.endpoint,
    };

    let timeout = match options.timeout_secs.or(file.timeout_secs) {
        Some(0) => return Err(ConfigError::ZeroTimeout),
        Some(secs) => Duration::from_secs(secs),
        None => defaults.timeout,
    };

    Ok(TranslatorConfig {
        endpoint,
        timeout,
        user_agent: file.user_agent.clone().unwrap_or(defaults.user_agent),
        source_language: options
            .from
            .clone()
            .or_else(|| file.from.clone())
            .unwrap_or(defaults.source_language),
        target_language: options
            .to
            .clone()
            .or_else(|| file.to.clone())
            .unwrap_or(defaults.target_language),
    })
}

fn parse_endpoint(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidEndpoint {
        value: raw.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEndpoint {
            value: raw.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    Ok(url)
}

/// Manages loading and saving the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a config manager for `$XDG_CONFIG_HOME/trans/config.toml`,
    /// or `~/.config/trans/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self::with_path(paths::config_dir()?.join("config.toml")))
    }

    pub const fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Loads the config file. A missing file yields the empty default;
    /// an unreadable or malformed file is an error.
    pub fn load(&self) -> Result<ConfigFile, ConfigError> {
        let contents = match fs::read_to_string(&self.config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.config_path.display(), "no config file, using defaults");
                return Ok(ConfigFile::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: self.config_path.clone(),
                    source,
                });
            }
        };

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: self.config_path.clone(),
            source,
        })
    }

    pub fn save(&self, config: &ConfigFile) -> anyhow::Result<()> {
        let contents = toml::to_string_pretty(config).map_err(ConfigError::from)?;
        atomic_write(&self.config_path, &contents)
    }
}
