//! # ck-core
//!
//! Configuration resolution and data-lake planning for coastkit.
//!
//! This crate provides:
//! - Loading and validating the pipeline configuration document (YAML or TOML)
//! - Resolution of logical directory names into absolute paths
//! - Date-based discovery of lake inputs and transfer planning
//! - Generation of starter configuration files from embedded templates
//!
//! ## Modules
//!
//! - [`config`]: Configuration loading, validation and path resolution
//! - [`lake`]: Data-lake listing and transfer planning
//! - [`init`]: Starter configuration generation

pub mod config;
pub mod init;
pub mod lake;
