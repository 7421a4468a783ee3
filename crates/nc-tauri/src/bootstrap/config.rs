//! # Configuration Loader
//!
//! Reads `config.toml` from the application config directory. A missing file
//! is normal and yields the defaults; an unreadable or invalid one also falls
//! back to the defaults, and the caller logs why once tracing is up.

use anyhow::Context;
use nc_core::config::AppConfig;
use std::path::{Path, PathBuf};

/// Where the effective configuration came from.
#[derive(Debug)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
    DefaultsAfterError { path: PathBuf, error: anyhow::Error },
}

impl ConfigSource {
    /// Report the source through `tracing`; call after the subscriber is installed.
    pub fn log(&self) {
        match self {
            ConfigSource::File(path) => {
                ::tracing::info!(path = %path.display(), "loaded configuration")
            }
            ConfigSource::Defaults => ::tracing::info!("no configuration file, using defaults"),
            ConfigSource::DefaultsAfterError { path, error } => ::tracing::warn!(
                path = %path.display(),
                error = format!("{error:#}"),
                "invalid configuration file, using defaults"
            ),
        }
    }
}

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if:
/// - File cannot be read (I/O error)
/// - Content is not valid TOML (parse error)
/// - Values are out of range, e.g. `compression_level = 12`
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value).context("Failed to map config values")
}

/// Load `config_path` if it exists, otherwise use the defaults.
pub fn resolve_config(config_path: &Path) -> (AppConfig, ConfigSource) {
    if !config_path.exists() {
        return (AppConfig::default(), ConfigSource::Defaults);
    }

    match load_config(config_path.to_path_buf()) {
        Ok(config) => (config, ConfigSource::File(config_path.to_path_buf())),
        Err(error) => (
            AppConfig::default(),
            ConfigSource::DefaultsAfterError {
                path: config_path.to_path_buf(),
                error,
            },
        ),
    }
}
