//! Command-line structure.

use ck_core::init::CONFIG_FILE_NAME;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "coastkit")]
#[command(about = "Coastal erosion pipeline configuration tool", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration document (YAML, or TOML by extension)
    #[arg(short, long, global = true, env = "COASTKIT_CONFIG", default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load and validate the configuration
    Validate,

    /// Print the resolved path of a directory (or file) entry
    Resolve {
        /// Logical name, e.g. `covariates.raw`
        name: String,

        /// Resolve a `files` entry instead of a directory
        #[arg(long)]
        file: bool,
    },

    /// Print a configuration value
    Get {
        /// Top-level section, e.g. `processing`
        section: String,

        /// Dotted key inside the section, e.g. `shoreline.min_obs`
        key: Option<String>,

        /// Print JSON instead of YAML
        #[arg(long)]
        json: bool,
    },

    /// Print the normalised document with defaults filled in
    Show,

    /// Plan (and optionally copy) lake inputs for the configured date
    Plan {
        /// Mount point of the data lake
        #[arg(long)]
        lake_root: PathBuf,

        /// Local folder the output tree is planned under
        #[arg(long, default_value = ".")]
        local_root: PathBuf,

        /// Fail when an input is missing
        #[arg(long)]
        strict: bool,

        /// Copy the planned files into the output tree
        #[arg(long)]
        apply: bool,
    },

    /// Write a starter configuration file
    Init {
        /// Target directory (defaults to current directory)
        #[arg(long, default_value = ".")]
        dir: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,

        /// Workflow settings only, without a dataConfig section
        #[arg(long)]
        minimal: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let cli = Cli::try_parse_from(["coastkit", "validate"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("coastkit.yaml"));
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["coastkit", "show", "-vv", "--config", "/tmp/run.toml"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("/tmp/run.toml"));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_get_without_key() {
        let cli = Cli::try_parse_from(["coastkit", "get", "cores"]).unwrap();
        match cli.command {
            Commands::Get { section, key, json } => {
                assert_eq!(section, "cores");
                assert!(key.is_none());
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_plan_requires_lake_root() {
        assert!(Cli::try_parse_from(["coastkit", "plan"]).is_err());

        let cli = Cli::try_parse_from(["coastkit", "plan", "--lake-root", "/mnt/lake", "--strict"]).unwrap();
        match cli.command {
            Commands::Plan {
                lake_root,
                local_root,
                strict,
                apply,
            } => {
                assert_eq!(lake_root, PathBuf::from("/mnt/lake"));
                assert_eq!(local_root, PathBuf::from("."));
                assert!(strict);
                assert!(!apply, "planning alone copies nothing");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
