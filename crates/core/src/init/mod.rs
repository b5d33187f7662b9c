//! Starter configuration generation.
//!
//! Writes a `coastkit.yaml` into a project directory from one of the
//! embedded templates:
//! - the full sample (workflow settings plus a `dataConfig` lake section)
//! - a minimal document with workflow settings only
//!
//! # Example
//!
//! ```no_run
//! use ck_core::init::{generate_config, InitOptions};
//! use std::path::PathBuf;
//!
//! let options = InitOptions {
//!     target_dir: PathBuf::from("."),
//!     force: false,
//!     minimal: true,
//! };
//!
//! let written = generate_config(&options)?;
//! println!("wrote {}", written.display());
//! # Ok::<(), ck_core::init::InitError>(())
//! ```

pub mod error;
pub mod generator;
pub mod templates;

// Re-export commonly used types for convenience
pub use error::{InitError, InitResult};
pub use generator::{generate_config, InitOptions, CONFIG_FILE_NAME};
pub use templates::get_template;
