//! coastkit CLI entry point.

mod args;
mod commands;
mod logging;

use args::{Cli, Commands};
use clap::Parser;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Validate => commands::validate(&cli.config),
        Commands::Resolve { name, file } => commands::resolve(&cli.config, &name, file),
        Commands::Get { section, key, json } => {
            commands::get(&cli.config, &section, key.as_deref().unwrap_or_default(), json)
        }
        Commands::Show => commands::show(&cli.config),
        Commands::Plan {
            lake_root,
            local_root,
            strict,
            apply,
        } => commands::plan(&cli.config, &lake_root, &local_root, strict, apply),
        Commands::Init {
            dir,
            force,
            minimal,
        } => commands::init(dir, force, minimal),
    }
}
