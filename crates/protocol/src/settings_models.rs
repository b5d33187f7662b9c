//! Workflow settings models.
//!
//! This module defines the `workflow_folder`-rooted part of a configuration
//! document: interpreter environment, credential files, run date, directory
//! layout, file names and processing parameters.

use crate::processing_models::ProcessingConfig;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Entry under `directories` that anchors every other entry.
pub const DATA_DIR_KEY: &str = "data_dir";

/// Entry under `directories` exempt from the trailing-separator rule.
pub const OUTPUT_BASE_KEY: &str = "output_base";

/// A node in the `directories` tree.
///
/// Leaves are directory fragments; groups nest further named fragments.
///
/// ```yaml
/// directories:
///   data_dir: data/
///   covariates:
///     raw: covariates/raw/
///     processed: covariates/processed/
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum DirectoryNode {
    /// A directory fragment such as `covariates/raw/`.
    Path(String),

    /// A named group of further fragments.
    Group(BTreeMap<String, DirectoryNode>),
}

impl DirectoryNode {
    /// Look up a node by dotted name relative to this one.
    ///
    /// An empty name returns `self`.
    pub fn lookup(&self, dotted: &str) -> Option<&DirectoryNode> {
        if dotted.is_empty() {
            return Some(self);
        }
        let (head, rest) = match dotted.split_once('.') {
            Some((head, rest)) => (head, rest),
            None => (dotted, ""),
        };
        match self {
            DirectoryNode::Group(children) => children.get(head)?.lookup(rest),
            DirectoryNode::Path(_) => None,
        }
    }

    /// Visit every leaf with its dotted name.
    pub fn for_each_leaf<'a>(&'a self, prefix: &str, visit: &mut impl FnMut(&str, &'a str)) {
        match self {
            DirectoryNode::Path(fragment) => visit(prefix, fragment),
            DirectoryNode::Group(children) => {
                for (name, child) in children {
                    let dotted = if prefix.is_empty() {
                        name.clone()
                    } else {
                        format!("{prefix}.{name}")
                    };
                    child.for_each_leaf(&dotted, visit);
                }
            }
        }
    }
}

/// Interpreter and package environment used by the external processing stages.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PythonEnv {
    /// Interpreter executable.
    pub python_path: String,

    /// Conda installation root (directory).
    pub conda_path: String,

    /// Name of the conda environment.
    pub conda_env: String,

    /// Packages expected in the environment.
    #[serde(default)]
    pub conda_pkgs: Vec<String>,
}

/// Settings rooted at `workflow_folder`.
///
/// # Example
///
/// ```yaml
/// workflow_folder: /srv/coastal-erosion/
/// python:
///   python_path: /opt/conda/envs/coastal/bin/python
///   conda_path: /opt/conda/
///   conda_env: coastal
/// cores: 8
/// date: 2025-04-01
/// directories:
///   data_dir: data/
///   output_base: output
/// processing:
///   # see ProcessingConfig
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WorkflowSettings {
    /// Root folder every resolved path starts from.
    pub workflow_folder: String,

    pub python: PythonEnv,

    /// Credential file names keyed by service.
    #[serde(default)]
    pub auth: BTreeMap<String, String>,

    /// Worker processes available to the processing stages.
    #[serde(default = "default_cores")]
    pub cores: u32,

    /// Run date.
    pub date: NaiveDate,

    /// Directory layout, see [`DirectoryNode`].
    pub directories: BTreeMap<String, DirectoryNode>,

    /// File names keyed by logical name.
    #[serde(default)]
    pub files: BTreeMap<String, String>,

    pub processing: ProcessingConfig,
}

impl WorkflowSettings {
    /// Look up a `directories` node by dotted name.
    pub fn directory(&self, dotted: &str) -> Option<&DirectoryNode> {
        let (head, rest) = match dotted.split_once('.') {
            Some((head, rest)) => (head, rest),
            None => (dotted, ""),
        };
        self.directories.get(head)?.lookup(rest)
    }
}

fn default_cores() -> u32 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> DirectoryNode {
        let mut covariates = BTreeMap::new();
        covariates.insert(
            "raw".to_string(),
            DirectoryNode::Path("covariates/raw/".to_string()),
        );
        let mut root = BTreeMap::new();
        root.insert("covariates".to_string(), DirectoryNode::Group(covariates));
        root.insert("data_dir".to_string(), DirectoryNode::Path("data/".to_string()));
        DirectoryNode::Group(root)
    }

    #[test]
    fn test_lookup_nested_leaf() {
        let tree = tree();
        assert_eq!(
            tree.lookup("covariates.raw"),
            Some(&DirectoryNode::Path("covariates/raw/".to_string()))
        );
        assert!(tree.lookup("covariates.missing").is_none());
        assert!(tree.lookup("data_dir.deeper").is_none());
    }

    #[test]
    fn test_for_each_leaf_reports_dotted_names() {
        let tree = tree();
        let mut seen = Vec::new();
        tree.for_each_leaf("", &mut |name, fragment| {
            seen.push(format!("{name}={fragment}"));
        });
        assert_eq!(seen, vec!["covariates.raw=covariates/raw/", "data_dir=data/"]);
    }
}
