//! Sync engine: stage, commit, and conditionally push one vault
//!
//! Stateless and per-vault. A clean tree short-circuits to
//! [`SyncResult::Clean`] without invoking commit or push, so repeated
//! passes over an idle vault never produce empty commits or spurious
//! push attempts.

use serde::Serialize;

use vault_core::{SyncResult, Vault, VaultStore};

use crate::repo::GitVault;
use crate::Result;

/// Per-vault entry of a sync pass, shaped for `--json` reports.
#[derive(Debug, Clone, Serialize)]
pub struct VaultReport {
    pub vault: String,
    pub result: SyncResult,
}

/// Synchronize a single vault.
///
/// Vaults without a repository are silently skipped (returns
/// [`SyncResult::Clean`]). Commit and push failures are downgraded to
/// warnings and reported through the result; the vault is left as far
/// as the operation got, with no retry inside this call.
///
/// # Errors
///
/// Returns an error only if git itself could not be invoked.
pub fn sync(vault: &Vault, message: &str) -> Result<SyncResult> {
    if !vault.has_repository() {
        tracing::debug!(vault = %vault, "no repository, skipping sync");
        return Ok(SyncResult::Clean);
    }

    let git = GitVault::new(vault);

    if !git.is_dirty()? {
        tracing::debug!(vault = %vault, "working tree clean, nothing to sync");
        return Ok(SyncResult::Clean);
    }

    let staged = git.git(&["add", "-A"])?;
    if !staged.success {
        tracing::warn!(vault = %vault, stderr = %staged.stderr, "failed to stage changes");
        return Ok(SyncResult::CommitFailed);
    }

    let committed = git.git(&["commit", "-m", message])?;
    if !committed.success {
        tracing::warn!(vault = %vault, stderr = %committed.stderr, "commit failed");
        return Ok(SyncResult::CommitFailed);
    }
    tracing::info!(vault = %vault, message, "committed changes");

    if !git.has_remote()? {
        return Ok(SyncResult::Committed);
    }

    let pushed = git.git(&["push"])?;
    if pushed.success {
        tracing::info!(vault = %vault, "pushed to remote");
        Ok(SyncResult::CommittedAndPushed)
    } else {
        // Not fatal: the next pass is the implicit retry.
        tracing::warn!(vault = %vault, stderr = %pushed.stderr, "push failed, will retry on next sync");
        Ok(SyncResult::PushFailed)
    }
}

/// Synchronize every vault in the store, in order.
///
/// A failure against one vault never blocks the remaining vaults.
pub fn sync_all(store: &VaultStore, message: &str) -> Vec<VaultReport> {
    store
        .iter()
        .map(|vault| {
            let result = match sync(vault, message) {
                Ok(result) => result,
                Err(e) => {
                    tracing::warn!(vault = %vault, error = %e, "sync could not run");
                    SyncResult::CommitFailed
                }
            };
            VaultReport {
                vault: vault.name(),
                result,
            }
        })
        .collect()
}

/// Default commit message for a debounce-triggered sync pass.
pub fn activity_message() -> String {
    format!(
        "vault sync: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    )
}

/// Commit message for the final pass after the supervised app exits.
pub fn session_end_message() -> String {
    format!(
        "vault sync (session end): {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    )
}
