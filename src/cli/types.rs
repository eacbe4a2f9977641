//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::commands::sub_breeds::SubBreedsArgs;

#[derive(Parser, Debug)]
#[command(name = "breedcache")]
#[command(about = "Look up dog sub-breeds with a memoizing provider", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Load configuration from this file instead of .breedcache/
    #[arg(short, long, global = true, env = "BREEDCACHE_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up sub-breeds for one or more breeds
    SubBreeds(SubBreedsArgs),

    /// Show the effective configuration
    Config,
}
