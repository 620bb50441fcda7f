mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let catalog = commands::load_catalog(&cli.snapshot)?;

    match cli.command {
        Commands::Parse { name, check } => {
            commands::parse(&catalog, &name, check)?;
        }

        Commands::Name { record, no_proper, pipe, market } => {
            commands::name(&catalog, &record, no_proper, pipe, market)?;
        }

        Commands::Exists { record } => {
            commands::exists(&catalog, &record)?;
        }

        Commands::Stats => {
            commands::stats(&catalog)?;
        }

        Commands::Parts => {
            commands::parts(&catalog)?;
        }

        Commands::Weapons { class, uncraftable } => {
            commands::weapons(&catalog, class.as_deref(), uncraftable)?;
        }
    }

    Ok(())
}
