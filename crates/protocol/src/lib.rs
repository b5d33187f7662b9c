//! # ck-protocol
//!
//! Schema definitions for coastkit configuration documents.
//!
//! This crate defines the typed structures a configuration document is
//! deserialized into:
//! - Workflow settings rooted at `workflow_folder` (python environment,
//!   credentials, directory layout, processing parameters)
//! - The tiered data-lake description found under `dataConfig`
//!
//! ## Modules
//!
//! - [`datetime`]: ISO-8601 date-or-datetime values
//! - [`settings_models`]: Workflow settings and directory layout
//! - [`processing_models`]: Per-stage processing parameters
//! - [`data_models`]: Data-lake tiers and dataset entries
//!
//! ## Design Principles
//!
//! - Minimal dependencies: only serde and chrono
//! - No I/O and no validation rules beyond what the types themselves encode;
//!   loading and rule checks live in `ck-core`
//! - Independent compilation: no dependencies on other coastkit crates

pub mod data_models;
pub mod datetime;
pub mod processing_models;
pub mod settings_models;

// Re-export all public types for convenience
pub use data_models::*;
pub use datetime::*;
pub use processing_models::*;
pub use settings_models::*;
