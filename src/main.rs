//! Breedcache CLI entry point.

use clap::Parser;

use breedcache::cli::{Cli, Commands};
use breedcache::{ConfigLoader, LoggerImpl};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli).await {
        breedcache::cli::handle_error(err, json);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match cli.config.as_deref() {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };
    let _logger = LoggerImpl::init(&config.logging)?;

    match cli.command {
        Commands::SubBreeds(args) => {
            breedcache::cli::commands::sub_breeds::execute(args, &config, cli.json).await
        }
        Commands::Config => breedcache::cli::commands::config::execute(&config, cli.json),
    }
}
