//! Command implementations for the vaultwatch binary

use std::path::PathBuf;

use colored::Colorize;

use vault_core::{Settings, SyncResult, VaultStore};
use vault_git::{activity_message, sync_all};

use crate::coordinator::LifecycleCoordinator;
use crate::error::{CliError, Result};

/// Merge the optional settings file with CLI overrides.
///
/// Flags always win over file values; the file is only read when
/// `--config` was given.
pub fn resolve_settings(
    config: Option<PathBuf>,
    vaults: Vec<PathBuf>,
    app: Option<String>,
    app_args: Vec<String>,
    debounce_secs: Option<u64>,
) -> Result<Settings> {
    let mut settings = match config {
        Some(path) => Settings::load(&path)?,
        None => Settings::default(),
    };

    if !vaults.is_empty() {
        settings.vaults = vaults;
    }
    if let Some(command) = app {
        settings.app.command = Some(command);
        settings.app.args = app_args;
    }
    if let Some(secs) = debounce_secs {
        settings.debounce_secs = secs;
    }

    Ok(settings)
}

/// Run a full supervised session.
pub fn run_session(settings: Settings) -> Result<()> {
    ensure_git()?;
    let store = VaultStore::from_paths(&settings.vaults)?;
    let command = settings.app.command.clone().ok_or_else(|| {
        CliError::user("no application configured; pass --app or set [app] command")
    })?;

    println!(
        "{} Supervising {} with {} vault(s), {}s debounce",
        "=>".blue().bold(),
        command.cyan(),
        store.len(),
        settings.debounce_secs
    );

    let coordinator = LifecycleCoordinator::new(
        store,
        settings.debounce_window(),
        command,
        settings.app.args.clone(),
    );

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(coordinator.run())?;

    println!("{} Session complete, all vaults synced", "OK".green().bold());
    Ok(())
}

/// Run a one-shot sync pass over every vault and report.
pub fn run_sync(settings: Settings, message: Option<String>, json: bool) -> Result<()> {
    ensure_git()?;
    let store = VaultStore::from_paths(&settings.vaults)?;
    let message = message.unwrap_or_else(activity_message);

    let reports = sync_all(&store, &message);

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    for report in &reports {
        let label = match report.result {
            SyncResult::Clean => "clean".dimmed(),
            SyncResult::Committed => "committed".green(),
            SyncResult::CommittedAndPushed => "committed+pushed".green().bold(),
            SyncResult::CommitFailed => "commit failed".red().bold(),
            SyncResult::PushFailed => "push failed".yellow(),
        };
        println!("{} {}: {}", "=>".blue().bold(), report.vault.cyan(), label);
    }
    Ok(())
}

/// Abort before launching anything if git is unusable.
fn ensure_git() -> Result<()> {
    let usable = std::process::Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false);

    if usable {
        Ok(())
    } else {
        Err(vault_core::Error::DependencyMissing {
            program: "git".to_string(),
        }
        .into())
    }
}
