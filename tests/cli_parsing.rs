//! Command-line argument parsing.

use breedcache::cli::{Cli, Commands};
use clap::Parser;
use std::path::Path;

#[test]
fn test_sub_breeds_accepts_multiple_breeds() {
    let cli = Cli::try_parse_from(["breedcache", "sub-breeds", "hound", "Bulldog"]).unwrap();

    match cli.command {
        Commands::SubBreeds(args) => {
            assert_eq!(args.breeds, vec!["hound", "Bulldog"]);
            assert!(args.fixture.is_none());
        }
        other => panic!("Expected SubBreeds, got {other:?}"),
    }
    assert!(!cli.json);
}

#[test]
fn test_sub_breeds_requires_a_breed() {
    assert!(Cli::try_parse_from(["breedcache", "sub-breeds"]).is_err());
}

#[test]
fn test_global_flags() {
    let cli = Cli::try_parse_from([
        "breedcache",
        "sub-breeds",
        "--fixture",
        "breeds.yaml",
        "pug",
        "--json",
        "--config",
        "custom.yaml",
    ])
    .unwrap();

    assert!(cli.json);
    assert_eq!(cli.config.as_deref(), Some(Path::new("custom.yaml")));
    let Commands::SubBreeds(args) = cli.command else {
        panic!("Expected SubBreeds");
    };
    assert_eq!(args.fixture.as_deref(), Some(Path::new("breeds.yaml")));
}

#[test]
fn test_config_command() {
    let cli = Cli::try_parse_from(["breedcache", "-j", "config"]).unwrap();
    assert!(matches!(cli.command, Commands::Config));
    assert!(cli.json);
}

#[test]
fn test_cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
