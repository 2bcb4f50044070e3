//! CLI for hydra-link: inspect and rewrite link addresses.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use hydra_link_core::config;
use std::path::PathBuf;

use commands::{run_change, run_completions, run_get, run_inspect, run_set};

/// Top-level CLI for hydra-link.
#[derive(Debug, Parser)]
#[command(name = "hydra-link")]
#[command(about = "Inspect and rewrite https:// and hydra:// link addresses", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Show host, base path, query and relative path of an address.
    Inspect {
        /// Address; `https://` is prepended when missing.
        address: String,
        /// Print a JSON object instead of text.
        #[arg(long)]
        json: bool,
        /// Config file to use instead of ~/.config/hydra-link/config.toml.
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },

    /// Print the value of one query parameter.
    Get {
        address: String,
        key: String,
    },

    /// Set one query parameter and print the rewritten address.
    Change {
        address: String,
        key: String,
        value: String,
    },

    /// Set several query parameters (`key=value`; a bare `key` is skipped).
    Set {
        address: String,
        #[arg(required = true, value_name = "KEY[=VALUE]")]
        pairs: Vec<String>,
    },

    /// Print shell completions.
    Completions {
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Inspect {
                address,
                json,
                config: config_path,
            } => {
                let cfg = match &config_path {
                    Some(path) => config::load_from(path)?,
                    None => config::load_or_init()?,
                };
                tracing::debug!("loaded config: {:?}", cfg);
                run_inspect(&address, json, &cfg)?;
            }
            CliCommand::Get { address, key } => run_get(&address, &key)?,
            CliCommand::Change {
                address,
                key,
                value,
            } => run_change(&address, &key, &value),
            CliCommand::Set { address, pairs } => run_set(&address, &pairs),
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
