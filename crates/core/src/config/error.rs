//! Error types for configuration loading.
//!
//! This module defines all errors that can occur while reading, parsing,
//! validating and querying a configuration document.

use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of a [`ConfigError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The document could not be read.
    Io,
    /// Malformed syntax or duplicate keys.
    Parse,
    /// Wrong shape, out-of-range value, missing required field.
    Validation,
    /// A queried key is absent and has no default.
    MissingKey,
    /// The loaded structure could not be re-encoded.
    Encode,
}

/// Errors that can occur during configuration loading and access.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read a configuration file from disk.
    #[error("Failed to read config file at {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not UTF-8 text.
    #[error("Config file at {path} is not valid UTF-8: {source}")]
    NotUtf8 {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },

    /// Failed to parse TOML configuration.
    #[error("Failed to parse TOML file at {path}: {source}")]
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse YAML file at {path}: {source}")]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// A section does not have the declared shape (missing field, wrong type).
    #[error("Invalid `{section}` section in {path}: {source}")]
    Schema {
        path: PathBuf,
        section: String,
        source: serde_yaml::Error,
    },

    /// A field violates a declared rule.
    #[error("Invalid configuration in {path}: {field} {reason}")]
    InvalidConfig {
        path: PathBuf,
        field: String,
        reason: String,
    },

    /// Queried key is absent and has no default.
    #[error("Missing configuration key `{key}`")]
    MissingKey { key: String },

    /// Failed to encode the loaded configuration.
    #[error("Failed to encode configuration: {source}")]
    Encode { source: serde_yaml::Error },
}

impl ConfigError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConfigError::FileRead { .. } => ErrorKind::Io,
            ConfigError::NotUtf8 { .. }
            | ConfigError::TomlParse { .. }
            | ConfigError::YamlParse { .. } => ErrorKind::Parse,
            ConfigError::Schema { .. } | ConfigError::InvalidConfig { .. } => {
                ErrorKind::Validation
            }
            ConfigError::MissingKey { .. } => ErrorKind::MissingKey,
            ConfigError::Encode { .. } => ErrorKind::Encode,
        }
    }

    pub(crate) fn missing(key: impl Into<String>) -> Self {
        ConfigError::MissingKey { key: key.into() }
    }
}

/// Type alias for Result with ConfigError.
pub type ConfigResult<T> = Result<T, ConfigError>;
