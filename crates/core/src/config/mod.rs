//! Configuration loading, validation and access.
//!
//! A configuration document is loaded once, validated in a single pass and
//! then frozen into a [`Config`]. Downstream stages receive it by reference
//! and query it through typed accessors and path resolution.

pub mod error;
pub mod loader;
pub mod models;
pub mod resolver;
pub mod validate;

pub use error::{ConfigError, ConfigResult, ErrorKind};
pub use loader::{load, DocumentFormat};
pub use models::Config;
pub use resolver::AbsolutePath;
