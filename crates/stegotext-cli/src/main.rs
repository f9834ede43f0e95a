use clap::Parser;
use thiserror::Error;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Stego(#[from] stegotext_core::StegoError),

    #[error("Cannot render the result as JSON")]
    Json(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    let delimiter = args.delimiter;

    match args.command {
        Commands::Hide(args) => args.run(&delimiter),
        Commands::Unveil(args) => args.run(&delimiter),
        Commands::UnveilRaw(args) => args.run(&delimiter),
        Commands::Capacity(args) => args.run(&delimiter),
        Commands::Detect(args) => args.run(&delimiter),
    }
}
