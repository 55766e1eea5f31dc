//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// vaultwatch - keep application vaults under version control
#[derive(Parser, Debug)]
#[command(name = "vaultwatch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a vaultwatch.toml settings file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run a full supervised session
    ///
    /// Reconciles every vault with its remote, launches the
    /// application, commits and pushes whenever file activity
    /// settles, and performs a final sync when the application exits.
    ///
    /// Examples:
    ///   vaultwatch run --app obsidian --vault ~/notes
    ///   vaultwatch run --config ~/.config/vaultwatch.toml
    Run {
        /// Vault directories to supervise (in sync order)
        #[arg(long = "vault")]
        vaults: Vec<PathBuf>,

        /// Application to launch and supervise
        #[arg(long)]
        app: Option<String>,

        /// Arguments passed to the application
        #[arg(long = "app-arg")]
        app_args: Vec<String>,

        /// Seconds of silence after the last file event before a sync fires
        #[arg(long)]
        debounce_secs: Option<u64>,
    },

    /// Run one sync pass over every vault and exit
    Sync {
        /// Vault directories to sync (in order)
        #[arg(long = "vault")]
        vaults: Vec<PathBuf>,

        /// Commit message (defaults to a timestamped message)
        #[arg(short, long)]
        message: Option<String>,

        /// Output the per-vault report as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}
