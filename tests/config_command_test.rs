//! Tests for the `config` subcommands against a temporary config file

use std::fs;

use clap::Parser;
use tempfile::TempDir;

use evochain::cli::commands::execute_command;
use evochain::cli::{Cli, CliError};
use evochain::config::RawSettings;
use evochain::exitcode;

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("evochain").chain(args.iter().copied())).expect("parse")
}

#[test]
fn given_no_file_when_running_config_init_then_writes_template() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("evochain.toml");
    let path_str = path.to_str().unwrap();

    execute_command(&cli(&["--config", path_str, "config", "init"])).unwrap();

    let raw: RawSettings = toml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert!(raw.timeout_secs.is_none(), "template keeps every setting commented");
}

#[test]
fn given_existing_file_when_running_config_init_then_fails_with_single_usage_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("evochain.toml");
    fs::write(&path, "timeout_secs = 3\n").unwrap();
    let path_str = path.to_str().unwrap();

    let err = execute_command(&cli(&["--config", path_str, "config", "init"])).unwrap_err();

    match &err {
        CliError::Usage(message) => {
            assert!(message.contains("already exists"));
            assert!(message.contains("--force"));
        }
        other => panic!("expected usage error, got {:?}", other),
    }
    assert_eq!(err.exit_code(), exitcode::USAGE);
    assert_eq!(fs::read_to_string(&path).unwrap(), "timeout_secs = 3\n");
}

#[test]
fn given_existing_file_and_force_when_running_config_init_then_overwrites() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("evochain.toml");
    fs::write(&path, "timeout_secs = 3\n").unwrap();
    let path_str = path.to_str().unwrap();

    execute_command(&cli(&["--config", path_str, "config", "init", "--force"])).unwrap();

    assert!(fs::read_to_string(&path)
        .unwrap()
        .starts_with("# evochain configuration"));
}
