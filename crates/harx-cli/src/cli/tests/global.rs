//! Tests for global flags.

use super::parse_cli;
use crate::cli::Cli;
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_defaults() {
    let cli = parse_cli(&["harx", "recipes"]);
    assert_eq!(cli.verbose, 0);
    assert!(cli.log_file.is_none());
    assert!(cli.config.is_none());
}

#[test]
fn cli_parse_verbosity_count() {
    assert_eq!(parse_cli(&["harx", "-vvv", "recipes"]).verbose, 3);
    assert_eq!(parse_cli(&["harx", "recipes", "-v", "-v"]).verbose, 2);
}

#[test]
fn cli_parse_log_file_and_config() {
    let cli = parse_cli(&[
        "harx",
        "-l",
        "/tmp/harx.log",
        "--config",
        "/etc/harx.toml",
        "recipes",
    ]);
    assert_eq!(cli.log_file.as_deref(), Some(Path::new("/tmp/harx.log")));
    assert_eq!(cli.config.as_deref(), Some(Path::new("/etc/harx.toml")));
}

#[test]
fn cli_requires_subcommand() {
    assert!(Cli::try_parse_from(["harx"]).is_err());
}

#[test]
fn cli_debug_assert() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
