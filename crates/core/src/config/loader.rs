//! Configuration document loader.
//!
//! Loading is a single deterministic pass:
//! 1. read the file
//! 2. parse it into a document tree (YAML, or TOML by extension); malformed
//!    syntax and duplicate keys fail here
//! 3. deserialize each present schema into its typed structure
//! 4. run the rule checks in [`super::validate`]
//!
//! Either the whole document loads and validates, or loading fails.

use super::error::{ConfigError, ConfigResult};
use super::models::{Config, DATA_CONFIG_KEY, WORKFLOW_FOLDER_KEY};
use super::validate::{validate_data, validate_settings, Violation};
use ck_protocol::{DataConfig, WorkflowSettings};
use serde_yaml::{Mapping, Value};
use std::path::{Path, PathBuf};

const INLINE_SOURCE: &str = "<inline>";

/// Syntax of a configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Toml,
}

impl DocumentFormat {
    /// `.toml` files are TOML; everything else is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => DocumentFormat::Toml,
            _ => DocumentFormat::Yaml,
        }
    }
}

/// Loads and validates a configuration document.
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - the file cannot be read (`FileRead`)
/// - the file is not UTF-8 text (`NotUtf8`)
/// - the syntax is malformed or a key repeats within one mapping
///   (`YamlParse` / `TomlParse`)
/// - a required field is missing or has the wrong type (`Schema`)
/// - a field breaks a declared rule (`InvalidConfig`)
///
/// # Example
///
/// ```rust,no_run
/// use ck_core::config::loader::load;
/// use std::path::Path;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load(Path::new("coastkit.yaml"))?;
/// println!("run date: {}", config.workflow()?.date);
/// # Ok(())
/// # }
/// ```
pub fn load(path: &Path) -> ConfigResult<Config> {
    tracing::debug!(path = %path.display(), "loading configuration");

    let bytes = std::fs::read(path).map_err(|source| ConfigError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8(bytes).map_err(|source| ConfigError::NotUtf8 {
        path: path.to_path_buf(),
        source,
    })?;

    parse_document(&content, DocumentFormat::from_path(path), path.to_path_buf())
}

/// Parses and validates in-memory document text.
///
/// `source` only labels errors.
pub fn parse_document(content: &str, format: DocumentFormat, source: PathBuf) -> ConfigResult<Config> {
    let document = match format {
        DocumentFormat::Yaml => parse_yaml(content, &source)?,
        DocumentFormat::Toml => parse_toml(content, &source)?,
    };
    build(document, source)
}

fn parse_yaml(content: &str, path: &Path) -> ConfigResult<Value> {
    // Mapping rejects duplicate keys while deserializing.
    serde_yaml::from_str(content).map_err(|source| ConfigError::YamlParse {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_toml(content: &str, path: &Path) -> ConfigResult<Value> {
    let table: toml::Table = toml::from_str(content).map_err(|source| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml_to_yaml(toml::Value::Table(table)))
}

/// Convert a TOML tree to the YAML document model.
///
/// TOML dates and datetimes become their ISO-8601 text.
fn toml_to_yaml(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => Value::Number(f.into()),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Sequence(items.into_iter().map(toml_to_yaml).collect()),
        toml::Value::Table(table) => Value::Mapping(
            table
                .into_iter()
                .map(|(key, value)| (Value::String(key), toml_to_yaml(value)))
                .collect::<Mapping>(),
        ),
    }
}

fn invalid(path: &Path, violation: Violation) -> ConfigError {
    ConfigError::InvalidConfig {
        path: path.to_path_buf(),
        field: violation.field,
        reason: violation.reason,
    }
}

/// Split the document into its schemas, deserialize and validate them.
fn build(document: Value, source: PathBuf) -> ConfigResult<Config> {
    let Value::Mapping(root) = document else {
        return Err(invalid(
            &source,
            Violation {
                field: "document".to_string(),
                reason: "must be a mapping at the top level".to_string(),
            },
        ));
    };

    let has_settings = root.contains_key(WORKFLOW_FOLDER_KEY);
    let data_value = root.get(DATA_CONFIG_KEY).cloned();
    if !has_settings && data_value.is_none() {
        return Err(invalid(
            &source,
            Violation {
                field: "document".to_string(),
                reason: format!("must contain `{WORKFLOW_FOLDER_KEY}` or `{DATA_CONFIG_KEY}`"),
            },
        ));
    }

    let settings = if has_settings {
        // Unknown top-level keys, `dataConfig` included, are ignored here.
        let settings: WorkflowSettings = serde_yaml::from_value(Value::Mapping(root))
            .map_err(|source_err| ConfigError::Schema {
                path: source.clone(),
                section: "workflow settings".to_string(),
                source: source_err,
            })?;
        validate_settings(&settings).map_err(|v| invalid(&source, v))?;
        Some(settings)
    } else {
        None
    };

    let data = match data_value {
        Some(value) => {
            let data: DataConfig =
                serde_yaml::from_value(value).map_err(|source_err| ConfigError::Schema {
                    path: source.clone(),
                    section: DATA_CONFIG_KEY.to_string(),
                    source: source_err,
                })?;
            validate_data(&data).map_err(|v| invalid(&source, v))?;
            Some(data)
        }
        None => None,
    };

    tracing::info!(
        path = %source.display(),
        workflow = settings.is_some(),
        data_lake = data.is_some(),
        "configuration loaded"
    );
    Ok(Config::new(source, settings, data))
}

impl Config {
    /// Load and validate the document at `path`. See [`load`].
    pub fn load(path: &Path) -> ConfigResult<Config> {
        load(path)
    }

    /// Parse and validate YAML text.
    pub fn from_yaml_str(content: &str) -> ConfigResult<Config> {
        parse_document(content, DocumentFormat::Yaml, PathBuf::from(INLINE_SOURCE))
    }

    /// Parse and validate TOML text.
    pub fn from_toml_str(content: &str) -> ConfigResult<Config> {
        parse_document(content, DocumentFormat::Toml, PathBuf::from(INLINE_SOURCE))
    }
}
