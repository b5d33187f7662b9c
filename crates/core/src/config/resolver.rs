//! Directory resolution.
//!
//! Logical directory names (dotted keys into `directories`) are resolved by
//! concatenating fragments onto `workflow_folder`:
//!
//! ```text
//! data_dir, output_base   workflow_folder + fragment
//! everything else         workflow_folder + data_dir + fragment
//! ```
//!
//! A fragment that is itself absolute restarts the chain. The result is
//! normalised to forward slashes whatever separators the document used.

use super::error::{ConfigError, ConfigResult};
use super::models::Config;
use ck_protocol::{DirectoryNode, DATA_DIR_KEY, OUTPUT_BASE_KEY};
use std::fmt;

/// A resolved, normalised path string.
///
/// Uses `/` as separator on every platform. Directories keep their trailing
/// separator, so [`AbsolutePath::is_dir`] reflects what the document declared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AbsolutePath(String);

impl AbsolutePath {
    /// Concatenate fragments, restarting at every absolute one, and normalise.
    pub fn from_fragments<'a>(fragments: impl IntoIterator<Item = &'a str>) -> Self {
        let mut joined = String::new();
        for fragment in fragments {
            if is_absolute_fragment(fragment) {
                joined.clear();
            } else if !joined.is_empty() && !joined.ends_with(['/', '\\']) {
                joined.push('/');
            }
            joined.push_str(fragment);
        }
        Self(normalize(&joined))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the path denotes a folder (ends in a separator).
    pub fn is_dir(&self) -> bool {
        self.0.ends_with('/')
    }

    /// Append a fragment (file name or sub-folder).
    pub fn join(&self, fragment: &str) -> Self {
        Self::from_fragments([self.as_str(), fragment])
    }
}

impl fmt::Display for AbsolutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_absolute_fragment(fragment: &str) -> bool {
    let bytes = fragment.as_bytes();
    fragment.starts_with(['/', '\\'])
        || (bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':')
}

/// Normalise separators, collapse repeats and drop `.` segments.
///
/// `..` segments are kept as written.
fn normalize(raw: &str) -> String {
    let unified = raw.replace('\\', "/");
    let bytes = unified.as_bytes();

    let (drive, rest) = if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
    {
        unified.split_at(2)
    } else {
        ("", unified.as_str())
    };
    let rooted = rest.starts_with('/');
    let trailing = rest.ends_with('/');

    let segments: Vec<&str> = rest
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect();

    let mut out = String::from(drive);
    if rooted {
        out.push('/');
    }
    out.push_str(&segments.join("/"));
    if segments.is_empty() {
        if !rooted && drive.is_empty() {
            out.push_str("./");
        }
    } else if trailing {
        out.push('/');
    }
    out
}

impl Config {
    /// Resolve a logical directory name to a path.
    ///
    /// `logical_name` is a dotted key into `directories`, optionally prefixed
    /// with `directories.` (`covariates.raw`, `directories.covariates.raw`).
    ///
    /// # Errors
    ///
    /// `MissingKey` when the document has no workflow settings, when the
    /// name is unknown, or when it addresses a group rather than a folder.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ck_core::config::Config;
    ///
    /// # fn example(config: &Config) -> Result<(), ck_core::config::ConfigError> {
    /// let raw = config.resolve_path("covariates.raw")?;
    /// assert!(raw.is_dir());
    /// # Ok(())
    /// # }
    /// ```
    pub fn resolve_path(&self, logical_name: &str) -> ConfigResult<AbsolutePath> {
        let settings = self.workflow()?;
        let name = logical_name
            .strip_prefix("directories.")
            .unwrap_or(logical_name);

        let fragment = match settings.directory(name) {
            Some(DirectoryNode::Path(fragment)) => fragment.as_str(),
            _ => return Err(ConfigError::missing(format!("directories.{name}"))),
        };

        let mut chain = vec![settings.workflow_folder.as_str()];
        if name != DATA_DIR_KEY && name != OUTPUT_BASE_KEY {
            match settings.directory(DATA_DIR_KEY) {
                Some(DirectoryNode::Path(data_dir)) => chain.push(data_dir.as_str()),
                _ => return Err(ConfigError::missing(format!("directories.{DATA_DIR_KEY}"))),
            }
        }
        chain.push(fragment);

        let resolved = AbsolutePath::from_fragments(chain);
        tracing::trace!(logical_name, resolved = %resolved, "resolved directory");
        Ok(resolved)
    }

    /// Resolve `files.<name>` to a path.
    ///
    /// The file is placed in the directory of the same logical name when one
    /// exists (`files.aoi` in `directories.aoi`), otherwise in `data_dir`.
    pub fn resolve_file(&self, name: &str) -> ConfigResult<AbsolutePath> {
        let settings = self.workflow()?;
        let file = settings
            .files
            .get(name)
            .ok_or_else(|| ConfigError::missing(format!("files.{name}")))?;

        let folder = match settings.directory(name) {
            Some(DirectoryNode::Path(_)) => self.resolve_path(name)?,
            _ => self.resolve_path(DATA_DIR_KEY)?,
        };
        Ok(folder.join(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concatenation_keeps_trailing_separator() {
        let path = AbsolutePath::from_fragments(["/srv/coastal/", "data/", "covariates/raw/"]);
        assert_eq!(path.as_str(), "/srv/coastal/data/covariates/raw/");
        assert!(path.is_dir());
    }

    #[test]
    fn test_backslashes_are_normalised() {
        let forward = AbsolutePath::from_fragments(["C:/work/", "data/", "covariates/raw/"]);
        let backward = AbsolutePath::from_fragments(["C:\\work\\", "data\\", "covariates\\raw\\"]);
        assert_eq!(forward, backward);
        assert_eq!(backward.as_str(), "C:/work/data/covariates/raw/");
    }

    #[test]
    fn test_redundant_segments_collapse() {
        let path = AbsolutePath::from_fragments(["./", "data//", "./raw/"]);
        assert_eq!(path.as_str(), "data/raw/");
    }

    #[test]
    fn test_parent_segments_are_kept() {
        let path = AbsolutePath::from_fragments(["/srv/coastal/", "../shared/"]);
        assert_eq!(path.as_str(), "/srv/coastal/../shared/");
    }

    #[test]
    fn test_absolute_fragment_restarts_chain() {
        let path = AbsolutePath::from_fragments(["/srv/coastal/", "data/", "/mnt/scratch/"]);
        assert_eq!(path.as_str(), "/mnt/scratch/");
    }

    #[test]
    fn test_missing_separator_between_fragments_is_inserted() {
        let path = AbsolutePath::from_fragments(["/srv/coastal", "output"]);
        assert_eq!(path.as_str(), "/srv/coastal/output");
        assert!(!path.is_dir());
    }

    #[test]
    fn test_empty_relative_chain_is_current_dir() {
        assert_eq!(AbsolutePath::from_fragments(["./", "./"]).as_str(), "./");
        assert_eq!(AbsolutePath::from_fragments(["/"]).as_str(), "/");
    }

    #[test]
    fn test_join_file() {
        let dir = AbsolutePath::from_fragments(["/srv/", "aoi/"]);
        assert_eq!(dir.join("aoi.gpkg").as_str(), "/srv/aoi/aoi.gpkg");
    }
}
