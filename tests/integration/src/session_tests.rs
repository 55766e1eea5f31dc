//! Cross-crate session flows: preflight reconciliation followed by
//! sync passes, over real temporary repositories with bare remotes.

use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use vault_core::{ReconcileOutcome, SyncResult, Vault, VaultStore};
use vault_git::{reconcile, sync, sync_all};
use vault_test_utils::git::{push_remote_change, vault_repo, vault_repo_with_remote};

fn make_dir(parent: &Path, name: &str) -> PathBuf {
    let dir = parent.join(name);
    fs::create_dir(&dir).unwrap();
    dir
}

#[test]
fn preflight_then_session_end_over_mixed_store() {
    let temp = TempDir::new().unwrap();
    let networked = make_dir(temp.path(), "networked");
    let remote = temp.path().join("remote.git");
    let scratch = temp.path().join("scratch");
    let offline = make_dir(temp.path(), "offline");
    let plain = make_dir(temp.path(), "plain");

    vault_repo_with_remote(&networked, &remote);
    push_remote_change(&remote, &scratch, "shared.md", "remote note\n");
    vault_repo(&offline);
    // `plain` has no repository at all

    let store = VaultStore::from_paths([&networked, &offline, &plain]).unwrap();

    // Preflight: each vault reconciled independently, failures isolated
    let outcomes: Vec<_> = store
        .iter()
        .map(|v| reconcile(v).unwrap())
        .collect();
    assert_eq!(
        outcomes,
        vec![
            ReconcileOutcome::AlreadyClean,
            ReconcileOutcome::PullFailed,
            ReconcileOutcome::AlreadyClean,
        ]
    );
    assert!(networked.join("shared.md").exists());

    // Session work happens in two vaults
    fs::write(networked.join("note.md"), "session edit").unwrap();
    fs::write(offline.join("note.md"), "session edit").unwrap();
    fs::write(plain.join("note.md"), "session edit").unwrap();

    // Session end: one pass over every vault, in order
    let reports = sync_all(&store, "vault sync (session end)");
    let results: Vec<_> = reports.iter().map(|r| r.result).collect();
    assert_eq!(
        results,
        vec![
            SyncResult::CommittedAndPushed,
            SyncResult::Committed,
            SyncResult::Clean,
        ]
    );

    // A second session-end pass would be a no-op everywhere
    let again: Vec<_> = sync_all(&store, "again")
        .iter()
        .map(|r| r.result)
        .collect();
    assert_eq!(
        again,
        vec![SyncResult::Clean, SyncResult::Clean, SyncResult::Clean]
    );
}

#[test]
fn conflicted_vault_does_not_block_the_rest() {
    let temp = TempDir::new().unwrap();
    let conflicted = make_dir(temp.path(), "conflicted");
    let remote = temp.path().join("remote.git");
    let scratch = temp.path().join("scratch");
    let healthy = make_dir(temp.path(), "healthy");

    vault_repo_with_remote(&conflicted, &remote);
    push_remote_change(&remote, &scratch, "welcome.md", "remote version\n");
    fs::write(conflicted.join("welcome.md"), "local version\n").unwrap();
    vault_repo(&healthy);

    let store = VaultStore::from_paths([&conflicted, &healthy]).unwrap();
    let outcomes: Vec<_> = store.iter().map(|v| reconcile(v).unwrap()).collect();

    assert_eq!(outcomes[0], ReconcileOutcome::StashedAndConflicted);
    assert!(outcomes[0].needs_attention());
    // The second vault was still processed
    assert_eq!(outcomes[1], ReconcileOutcome::PullFailed);
}

#[test]
fn push_retries_implicitly_on_the_next_pass() {
    let temp = TempDir::new().unwrap();
    let vault_dir = make_dir(temp.path(), "vault");
    let remote = temp.path().join("remote.git");
    vault_repo_with_remote(&vault_dir, &remote);

    // Break the remote URL so the first push fails
    vault_test_utils::git::git(
        &vault_dir,
        &["remote", "set-url", "origin", "/dev/null/nowhere.git"],
    );
    fs::write(vault_dir.join("note.md"), "offline edit").unwrap();

    let vault = Vault::new(&vault_dir);
    assert_eq!(sync(&vault, "offline pass").unwrap(), SyncResult::PushFailed);

    // Connectivity restored; the next dirty pass pushes everything
    let remote_str = remote.to_str().unwrap();
    vault_test_utils::git::git(&vault_dir, &["remote", "set-url", "origin", remote_str]);
    fs::write(vault_dir.join("note.md"), "online edit").unwrap();

    assert_eq!(
        sync(&vault, "online pass").unwrap(),
        SyncResult::CommittedAndPushed
    );
}
