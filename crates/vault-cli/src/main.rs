//! vaultwatch CLI
//!
//! Supervises a desktop application and keeps its vaults committed,
//! pushed, and reconciled with their remotes.

mod cli;
mod commands;
mod coordinator;
mod error;
mod notify;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    match cli.command {
        Some(Commands::Run {
            vaults,
            app,
            app_args,
            debounce_secs,
        }) => {
            let settings =
                commands::resolve_settings(cli.config, vaults, app, app_args, debounce_secs)?;
            commands::run_session(settings)
        }
        Some(Commands::Sync {
            vaults,
            message,
            json,
        }) => {
            let settings = commands::resolve_settings(cli.config, vaults, None, vec![], None)?;
            commands::run_sync(settings, message, json)
        }
        None => {
            println!(
                "{} vault sync supervisor",
                "vaultwatch".green().bold()
            );
            println!();
            println!(
                "Run {} for available commands.",
                "vaultwatch --help".cyan()
            );
            Ok(())
        }
    }
}
