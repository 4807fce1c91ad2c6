//! Command-line arguments for the demo binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "statelink",
    version,
    about = "Counter demo for the statelink store",
    long_about = "Counter demo for the statelink store.\n\n\
                  Runs a terminal view connected to the store, or replays\n\
                  recorded actions headlessly."
)]
pub struct Cli {
    /// Path to the config file (default: <config dir>/statelink/config.toml).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the terminal view (default).
    Run,

    /// Dispatch actions from a JSON file and print the final state.
    Replay {
        /// JSON array of `{"kind": ..., "payload": ...}` objects.
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the effective configuration as TOML.
    ShowConfig,
}

impl Cli {
    pub fn command(&self) -> &Command {
        self.command.as_ref().unwrap_or(&Command::Run)
    }
}
