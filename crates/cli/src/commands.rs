//! Command implementations.
//!
//! Results go to stdout; diagnostics are logged to stderr.

use ck_core::config::Config;
use ck_core::init::{generate_config, InitOptions};
use ck_core::lake::{execute_plan, plan_transfers, PlanOptions};
use ck_protocol::Tier;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

fn load(path: &Path) -> Result<Config> {
    let config = Config::load(path)?;
    tracing::debug!(path = %path.display(), "configuration ready");
    Ok(config)
}

pub fn validate(path: &Path) -> Result<()> {
    let config = load(path)?;
    println!("{} {} is valid", "✓".green().bold(), path.display());

    if let Some(settings) = config.settings() {
        println!("  workflow folder: {}", settings.workflow_folder);
        println!("  run date:        {}", settings.date);
        println!("  directories:     {}", settings.directories.len());
    }
    if let Some(data) = config.data() {
        let tiers: Vec<&str> = data.directories.keys().map(Tier::as_str).collect();
        println!("  lake date:       {}", data.date);
        println!("  lake tiers:      {}", tiers.join(", "));
    }
    Ok(())
}

pub fn resolve(path: &Path, name: &str, file: bool) -> Result<()> {
    let config = load(path)?;
    let resolved = if file {
        config.resolve_file(name)?
    } else {
        config.resolve_path(name)?
    };
    println!("{resolved}");
    Ok(())
}

pub fn get(path: &Path, section: &str, key: &str, json: bool) -> Result<()> {
    let config = load(path)?;
    let value = config.get(section, key)?;

    if json {
        let rendered = serde_json::to_string_pretty(&value).wrap_err("Failed to render value as JSON")?;
        println!("{rendered}");
    } else {
        let rendered = serde_yaml::to_string(&value).wrap_err("Failed to render value as YAML")?;
        print!("{rendered}");
    }
    Ok(())
}

pub fn show(path: &Path) -> Result<()> {
    let config = load(path)?;
    print!("{}", config.to_yaml_string()?);
    Ok(())
}

pub fn plan(path: &Path, lake_root: &Path, local_root: &Path, strict: bool, apply: bool) -> Result<()> {
    let config = load(path)?;
    let data = config.data_config()?;
    let options = PlanOptions {
        error_for_missing_files: strict,
    };
    let plan = plan_transfers(data, lake_root, local_root, &options)?;

    for &tier in &Tier::ALL {
        let transfers: Vec<_> = plan.for_tier(tier).collect();
        let missing: Vec<_> = plan.missing.iter().filter(|m| m.tier == tier).collect();
        if transfers.is_empty() && missing.is_empty() {
            continue;
        }

        println!("{}", tier.as_str().cyan().bold());
        for transfer in transfers {
            println!(
                "  {} {} -> {}",
                transfer.kind.to_string().dimmed(),
                transfer.source.display(),
                transfer.destination.display()
            );
        }
        for input in missing {
            println!(
                "  {} {} {}",
                "missing".yellow().bold(),
                input.kind,
                input.expected.display()
            );
        }
    }

    let summary = format!(
        "{} transfer(s), {} missing input(s)",
        plan.transfers.len(),
        plan.missing.len()
    );
    if plan.is_complete() {
        println!("{}", summary.green());
    } else {
        println!("{}", summary.yellow());
    }

    if apply {
        let report = execute_plan(&plan)?;
        println!(
            "{} Copied {} file(s), {} bytes",
            "✓".green().bold(),
            report.copied.len(),
            report.bytes
        );
    }
    Ok(())
}

pub fn init(dir: PathBuf, force: bool, minimal: bool) -> Result<()> {
    let options = InitOptions {
        target_dir: dir,
        force,
        minimal,
    };
    let written = generate_config(&options)?;
    println!("{} Wrote {}", "✓".green().bold(), written.display());
    Ok(())
}
