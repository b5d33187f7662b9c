//! Writes a starter configuration file from an embedded template.

use super::error::{InitError, InitResult};
use super::templates::{get_template, FULL_TEMPLATE, MINIMAL_TEMPLATE};
use std::fs;
use std::path::PathBuf;

/// File name `coastkit init` writes and the CLI reads by default.
pub const CONFIG_FILE_NAME: &str = "coastkit.yaml";

/// Options for generating a configuration file.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Directory the configuration file is written into.
    pub target_dir: PathBuf,

    /// Overwrite an existing configuration file.
    pub force: bool,

    /// Write workflow settings only, without a `dataConfig` section.
    pub minimal: bool,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            target_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            force: false,
            minimal: false,
        }
    }
}

/// Write `coastkit.yaml` into `options.target_dir`.
///
/// The target directory is created when missing. Returns the path of the
/// written file, or an `InitError` if:
/// - The file already exists (without force flag)
/// - The template is not embedded
/// - File system operations fail
pub fn generate_config(options: &InitOptions) -> InitResult<PathBuf> {
    let target_path = options.target_dir.join(CONFIG_FILE_NAME);

    if target_path.exists() && !options.force {
        return Err(InitError::FileExists(target_path));
    }

    let template = if options.minimal {
        MINIMAL_TEMPLATE
    } else {
        FULL_TEMPLATE
    };
    let content = get_template(template).ok_or_else(|| InitError::TemplateNotFound(template.to_string()))?;

    fs::create_dir_all(&options.target_dir).map_err(|source| InitError::DirectoryCreate {
        path: options.target_dir.clone(),
        source,
    })?;

    fs::write(&target_path, content).map_err(|source| InitError::FileWrite {
        path: target_path.clone(),
        source,
    })?;

    tracing::info!(path = %target_path.display(), template, "configuration written");
    Ok(target_path)
}
