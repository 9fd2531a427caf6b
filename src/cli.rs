//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `todo-store`.
#[derive(Debug, Parser)]
#[command(name = "todo-store", version, about = "Drive an in-memory todo store")]
pub struct Cli {
    /// YAML configuration file (defaults to ./todo-store.yaml when present).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Execute an operation script against a fresh store.
    Run {
        /// Script file (YAML or JSON).
        script: PathBuf,
        /// Serve the data layer from this cassette instead of a live store.
        #[arg(long, value_name = "CASSETTE")]
        replay: Option<PathBuf>,
    },
    /// Run the built-in add/update/list/delete walk-through.
    Demo,
    /// Print the effective configuration.
    Config,
}
