//! Error types for data-lake planning.

use ck_protocol::Tier;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while scanning the lake or planning transfers.
#[derive(Error, Debug)]
pub enum LakeError {
    /// A dataset folder named in the configuration does not exist.
    #[error("Dataset directory not found: {path}")]
    DatasetDirMissing { path: PathBuf },

    /// Failed to walk a dataset folder.
    #[error("Failed to traverse directory {path}: {source}")]
    DirectoryWalk {
        path: PathBuf,
        source: walkdir::Error,
    },

    /// An input is absent and missing inputs were declared fatal.
    #[error("Missing {dataset} input in tier {tier}: {path}")]
    MissingInput {
        tier: Tier,
        dataset: String,
        path: PathBuf,
    },

    /// Failed to create a destination folder.
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to copy a planned transfer.
    #[error("Failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    /// A file-name date pattern failed to compile.
    #[error("Invalid date pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Type alias for Result with LakeError.
pub type LakeResult<T> = Result<T, LakeError>;
