//! The loaded, immutable configuration.
//!
//! A [`Config`] is built once by the loader and never mutated afterwards. It
//! is `Send + Sync`; share it by reference (`&Config` or `Arc<Config>`) with
//! every stage that needs it.

use super::error::{ConfigError, ConfigResult};
use ck_protocol::{DataConfig, WorkflowSettings};
use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};
use std::path::{Path, PathBuf};

/// Top-level key holding the data-lake section.
pub const DATA_CONFIG_KEY: &str = "dataConfig";

/// Top-level key whose presence marks the workflow settings schema.
pub const WORKFLOW_FOLDER_KEY: &str = "workflow_folder";

/// A validated configuration document.
///
/// Carries either or both of the two top-level schemas: workflow settings
/// (rooted at `workflow_folder`) and the data-lake `dataConfig` section.
///
/// # Example
///
/// ```rust,no_run
/// use ck_core::config::Config;
/// use std::path::Path;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Config::load(Path::new("coastkit.yaml"))?;
/// let raw = config.resolve_path("covariates.raw")?;
/// let min_obs: f64 = config.get_as("processing", "shoreline.min_obs")?;
/// println!("{raw} (min_obs = {min_obs})");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    source: PathBuf,
    settings: Option<WorkflowSettings>,
    data: Option<DataConfig>,
}

impl PartialEq for Config {
    /// Two configurations are equal when every declared field is; the
    /// document they were read from does not take part.
    fn eq(&self, other: &Self) -> bool {
        self.settings == other.settings && self.data == other.data
    }
}

impl Config {
    pub(crate) fn new(
        source: PathBuf,
        settings: Option<WorkflowSettings>,
        data: Option<DataConfig>,
    ) -> Self {
        Self {
            source,
            settings,
            data,
        }
    }

    /// Where the document was read from (`<inline>` for in-memory text).
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Workflow settings, if the document declares them.
    pub fn settings(&self) -> Option<&WorkflowSettings> {
        self.settings.as_ref()
    }

    /// Data-lake section, if the document declares one.
    pub fn data(&self) -> Option<&DataConfig> {
        self.data.as_ref()
    }

    /// Workflow settings, or `MissingKey("workflow_folder")`.
    pub fn workflow(&self) -> ConfigResult<&WorkflowSettings> {
        self.settings
            .as_ref()
            .ok_or_else(|| ConfigError::missing(WORKFLOW_FOLDER_KEY))
    }

    /// Data-lake section, or `MissingKey("dataConfig")`.
    pub fn data_config(&self) -> ConfigResult<&DataConfig> {
        self.data
            .as_ref()
            .ok_or_else(|| ConfigError::missing(DATA_CONFIG_KEY))
    }

    /// The configuration as a document tree, defaults filled in.
    pub fn to_document(&self) -> ConfigResult<Value> {
        let mut root = match &self.settings {
            Some(settings) => {
                serde_yaml::to_value(settings).map_err(|source| ConfigError::Encode { source })?
            }
            None => Value::Mapping(Mapping::new()),
        };
        if let (Some(data), Value::Mapping(mapping)) = (&self.data, &mut root) {
            let data = serde_yaml::to_value(data).map_err(|source| ConfigError::Encode { source })?;
            mapping.insert(Value::String(DATA_CONFIG_KEY.to_string()), data);
        }
        Ok(root)
    }

    /// Serialize to YAML. Reloading the output yields an equal `Config`.
    pub fn to_yaml_string(&self) -> ConfigResult<String> {
        serde_yaml::to_string(&self.to_document()?).map_err(|source| ConfigError::Encode { source })
    }

    /// Look up a value by section and dotted key.
    ///
    /// `section` is a top-level key (`cores`, `processing`, `dataConfig`, ...);
    /// `key` is a dotted path inside it, where numeric parts index sequences.
    /// An empty key returns the whole section. Declared defaults are visible.
    ///
    /// # Errors
    ///
    /// `MissingKey` when the value is absent and no default is declared.
    pub fn get(&self, section: &str, key: &str) -> ConfigResult<Value> {
        let full_key = if key.is_empty() {
            section.to_string()
        } else {
            format!("{section}.{key}")
        };
        let missing = || ConfigError::missing(full_key.clone());

        let document = self.to_document()?;
        let mut current = document.get(section).ok_or_else(missing)?;
        for part in key.split('.').filter(|part| !part.is_empty()) {
            current = match current {
                Value::Sequence(items) => part
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| items.get(index)),
                other => other.get(part),
            }
            .ok_or_else(missing)?;
        }
        if current.is_null() {
            return Err(missing());
        }
        Ok(current.clone())
    }

    /// Typed variant of [`Config::get`].
    ///
    /// # Errors
    ///
    /// `MissingKey` as for `get`; `Schema` when the value does not have the
    /// requested type.
    pub fn get_as<T: DeserializeOwned>(&self, section: &str, key: &str) -> ConfigResult<T> {
        let value = self.get(section, key)?;
        serde_yaml::from_value(value).map_err(|source| ConfigError::Schema {
            path: self.source.clone(),
            section: if key.is_empty() {
                section.to_string()
            } else {
                format!("{section}.{key}")
            },
            source,
        })
    }
}
