//! Preflight reconciliation: stash → pull --rebase → restore
//!
//! Runs once per vault at startup, strictly before the supervised
//! application and the watcher begin. Stashing first lets the rebase
//! apply against a clean tree, then local edits are reapplied on top —
//! far fewer conflicts than rebasing onto a dirty tree.

use vault_core::{ReconcileOutcome, Vault};

use crate::repo::GitVault;
use crate::Result;

/// Reconcile one vault with its remote before the session starts.
///
/// - A pull failure (offline, no remote configured) is downgraded to a
///   warning; the session proceeds with local files as-is.
/// - A stash-pop conflict is surfaced as
///   [`ReconcileOutcome::StashedAndConflicted`] and left for the user;
///   no automatic resolution is ever attempted.
/// - Vaults without a repository are silently skipped.
///
/// # Errors
///
/// Returns an error only if git itself could not be invoked.
pub fn reconcile(vault: &Vault) -> Result<ReconcileOutcome> {
    if !vault.has_repository() {
        tracing::debug!(vault = %vault, "no repository, skipping reconcile");
        return Ok(ReconcileOutcome::AlreadyClean);
    }

    let git = GitVault::new(vault);

    let mut stashed = false;
    if git.is_dirty()? {
        let label = stash_label();
        let stash = git.git(&["stash", "push", "--include-untracked", "-m", &label])?;
        if stash.success {
            tracing::info!(vault = %vault, label, "stashed local edits before pull");
            stashed = true;
        } else {
            tracing::warn!(vault = %vault, stderr = %stash.stderr, "stash failed, pulling onto dirty tree");
        }
    }

    // Rebase semantics: never pollute history with automatic merge commits.
    let pull = git.git(&["pull", "--rebase"])?;
    if pull.success {
        tracing::info!(vault = %vault, "pulled remote state");
    } else {
        tracing::warn!(vault = %vault, stderr = %pull.stderr, "pull failed, continuing with local state");
    }

    if stashed {
        let pop = git.git(&["stash", "pop"])?;
        if !pop.success {
            tracing::warn!(
                vault = %vault,
                stderr = %pop.stderr,
                "stash pop conflicted; resolve manually before trusting this vault"
            );
            return Ok(ReconcileOutcome::StashedAndConflicted);
        }
        return Ok(ReconcileOutcome::StashedAndRestored);
    }

    if pull.success {
        Ok(ReconcileOutcome::AlreadyClean)
    } else {
        Ok(ReconcileOutcome::PullFailed)
    }
}

/// Uniquely taggable stash entry name.
fn stash_label() -> String {
    format!(
        "vaultwatch-preflight-{}-{}",
        std::process::id(),
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;
    use vault_test_utils::git::{push_remote_change, vault_repo, vault_repo_with_remote};

    #[test]
    fn vault_without_repository_is_a_noop() {
        let temp = TempDir::new().unwrap();
        let vault = Vault::new(temp.path());

        let outcome = reconcile(&vault).unwrap();
        assert_eq!(outcome, ReconcileOutcome::AlreadyClean);
        assert!(!vault.has_repository());
    }

    #[test]
    fn clean_vault_without_remote_reports_pull_failed() {
        let temp = TempDir::new().unwrap();
        vault_repo(temp.path());

        let vault = Vault::new(temp.path());
        assert_eq!(reconcile(&vault).unwrap(), ReconcileOutcome::PullFailed);
    }

    #[test]
    fn dirty_vault_without_remote_still_restores_edits() {
        let temp = TempDir::new().unwrap();
        vault_repo(temp.path());
        fs::write(temp.path().join("draft.md"), "local edit").unwrap();

        let vault = Vault::new(temp.path());
        let outcome = reconcile(&vault).unwrap();

        // Scenario A: the pull is downgraded to a warning, local edits survive
        assert_eq!(outcome, ReconcileOutcome::StashedAndRestored);
        assert_eq!(
            fs::read_to_string(temp.path().join("draft.md")).unwrap(),
            "local edit"
        );
    }

    #[test]
    fn clean_vault_pulls_remote_changes() {
        let temp = TempDir::new().unwrap();
        let vault_dir = temp.path().join("vault");
        let remote_dir = temp.path().join("remote.git");
        let scratch_dir = temp.path().join("scratch");
        fs::create_dir(&vault_dir).unwrap();
        vault_repo_with_remote(&vault_dir, &remote_dir);
        push_remote_change(&remote_dir, &scratch_dir, "shared.md", "from elsewhere");

        let vault = Vault::new(&vault_dir);
        let outcome = reconcile(&vault).unwrap();

        assert_eq!(outcome, ReconcileOutcome::AlreadyClean);
        assert_eq!(
            fs::read_to_string(vault_dir.join("shared.md")).unwrap(),
            "from elsewhere"
        );
    }

    #[test]
    fn dirty_vault_with_remote_changes_restores_on_top() {
        let temp = TempDir::new().unwrap();
        let vault_dir = temp.path().join("vault");
        let remote_dir = temp.path().join("remote.git");
        let scratch_dir = temp.path().join("scratch");
        fs::create_dir(&vault_dir).unwrap();
        vault_repo_with_remote(&vault_dir, &remote_dir);
        push_remote_change(&remote_dir, &scratch_dir, "shared.md", "from elsewhere");

        // Local uncommitted edit to an unrelated file
        fs::write(vault_dir.join("draft.md"), "local edit").unwrap();

        let vault = Vault::new(&vault_dir);
        let outcome = reconcile(&vault).unwrap();

        assert_eq!(outcome, ReconcileOutcome::StashedAndRestored);
        assert_eq!(
            fs::read_to_string(vault_dir.join("shared.md")).unwrap(),
            "from elsewhere"
        );
        assert_eq!(
            fs::read_to_string(vault_dir.join("draft.md")).unwrap(),
            "local edit"
        );
    }

    #[test]
    fn conflicting_local_edit_is_left_for_the_user() {
        let temp = TempDir::new().unwrap();
        let vault_dir = temp.path().join("vault");
        let remote_dir = temp.path().join("remote.git");
        let scratch_dir = temp.path().join("scratch");
        fs::create_dir(&vault_dir).unwrap();
        vault_repo_with_remote(&vault_dir, &remote_dir);
        // Remote edits welcome.md; so does the local uncommitted change
        push_remote_change(&remote_dir, &scratch_dir, "welcome.md", "remote version\n");
        fs::write(vault_dir.join("welcome.md"), "local version\n").unwrap();

        let vault = Vault::new(&vault_dir);
        let outcome = reconcile(&vault).unwrap();

        assert_eq!(outcome, ReconcileOutcome::StashedAndConflicted);
        // The conflicted content is intentionally left in the tree
        let content = fs::read_to_string(vault_dir.join("welcome.md")).unwrap();
        assert!(content.contains("local version") || content.contains("<<<<<<<"));
    }
}
