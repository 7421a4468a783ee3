//! Application configuration domain model

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::codec::CompressionLevel;
use crate::serialized::LineEnding;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Invalid(#[from] toml::de::Error),
}

/// Application configuration
///
/// Every section and field is optional in the TOML file; missing values take
/// their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Codec settings
    pub codec: CodecConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Codec configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// DEFLATE level used when encoding, 0..=9
    pub compression_level: CompressionLevel,

    /// Separator between the two lines written to files and the clipboard
    pub line_ending: LineEnding,
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive such as `"debug"` or `"nc_app=trace"`.
    /// `RUST_LOG` takes precedence when set.
    pub level: Option<String>,
}

impl AppConfig {
    pub fn from_toml(value: &toml::Value) -> Result<Self, ConfigError> {
        Ok(value.clone().try_into()?)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}
