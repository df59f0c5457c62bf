mod cli;
mod commands;
mod envelope;
mod error;
mod keys;
mod password;
mod record;
mod token;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::GenerateKey(args) => commands::generate::run_generate_key(args)?,
        Commands::View(args) => commands::view::run_view(args)?,
        Commands::RemoveKey(args) => commands::remove::run_remove_key(args)?,
        Commands::Encode(args) => commands::encode::run_encode(args)?,
        Commands::Decode(args) => commands::decode::run_decode(args)?,
    }

    Ok(())
}
