//! Embedded starter configuration templates.
//!
//! This module uses `rust-embed` to embed the workspace `templates/`
//! directory into the binary at compile time, so `coastkit init` works
//! without any files on disk.

use rust_embed::RustEmbed;

/// Full sample with workflow settings and a `dataConfig` section.
pub const FULL_TEMPLATE: &str = "coastkit.yaml";

/// Workflow settings only, with the smallest valid processing block.
pub const MINIMAL_TEMPLATE: &str = "coastkit.minimal.yaml";

/// Embedded template files from the `templates/` directory.
///
/// The path is relative to the crate root:
/// - `CARGO_MANIFEST_DIR` = `crates/core`
/// - `../../templates` = workspace `templates/`
///
/// With the `debug-embed` feature, debug builds embed the files as well, so
/// tests see exactly what ships in release.
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../templates"]
pub struct TemplateAssets;

/// Get template file content by name.
///
/// # Example
/// ```
/// use ck_core::init::templates::{get_template, FULL_TEMPLATE};
///
/// let sample = get_template(FULL_TEMPLATE).expect("sample should be embedded");
/// assert!(sample.contains("workflow_folder:"));
/// ```
pub fn get_template(name: &str) -> Option<String> {
    TemplateAssets::get(name).map(|file| String::from_utf8_lossy(file.data.as_ref()).to_string())
}
