//! CLI for harx.

mod commands;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use harx_core::config::{self, HarxConfig};
use std::path::{Path, PathBuf};

use commands::{run_completions, run_entries, run_extract, run_recipes, EntryFilter};

/// Top-level CLI for harx.
#[derive(Debug, Parser)]
#[command(name = "harx", version)]
#[command(
    about = "harx: extract records and media from captured HAR sessions",
    long_about = None
)]
pub struct Cli {
    /// Increase log verbosity (-v warn, -vv info, -vvv debug, -vvvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Write logs to this file instead of stderr.
    #[arg(short = 'l', long, global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Read configuration from this file instead of ~/.config/harx/config.toml.
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Run recipes over HAR files (directories are scanned for *.har).
    Run {
        /// HAR files or directories.
        #[arg(required = true, value_name = "PATH")]
        paths: Vec<PathBuf>,

        /// Recipe to run; repeat for several (default: from config).
        #[arg(short, long = "recipe", value_name = "NAME")]
        recipes: Vec<String>,

        /// Directory outputs are written to (default: from config, else current dir).
        #[arg(short, long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },

    /// List the entries of a HAR file, optionally filtered.
    Entries {
        /// HAR file.
        path: PathBuf,

        /// Keep entries whose MIME type contains this text.
        #[arg(long)]
        mime: Option<String>,

        /// Keep entries whose URL contains this text.
        #[arg(long)]
        url: Option<String>,

        /// Keep entries with exactly this HTTP method.
        #[arg(long)]
        method: Option<String>,
    },

    /// List available recipes.
    Recipes,

    /// Print shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            CliCommand::Run {
                paths,
                recipes,
                output_dir,
            } => {
                let cfg = load_config(self.config.as_deref())?;
                run_extract(&cfg, &paths, &recipes, output_dir)?;
            }
            CliCommand::Entries {
                path,
                mime,
                url,
                method,
            } => run_entries(&path, &EntryFilter { mime, url, method })?,
            CliCommand::Recipes => {
                let cfg = load_config(self.config.as_deref())?;
                run_recipes(&cfg);
            }
            CliCommand::Completions { shell } => run_completions(shell),
        }
        Ok(())
    }
}

fn load_config(explicit: Option<&Path>) -> Result<HarxConfig> {
    let cfg = match explicit {
        Some(path) => config::load_from(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => config::load_or_init().unwrap_or_else(|err| {
            tracing::warn!("using default config: {:#}", err);
            HarxConfig::default()
        }),
    };
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

#[cfg(test)]
mod tests;
