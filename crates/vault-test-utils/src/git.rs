//! Vault repository fixtures driven by the `git` CLI, with bare
//! "remotes" on the local filesystem so pull, push, and rebase flows
//! work without any network.

use std::fs;
use std::path::Path;
use std::process::Command;

/// Runs a git command in `dir`, panicking with stderr on failure.
///
/// Fixture helper only; production code never panics on git failures.
///
/// # Panics
/// Panics if the command cannot be spawned or exits non-zero.
pub fn git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap_or_else(|e| panic!("fixture: failed to run `git {args:?}`: {e}"));
    if !output.status.success() {
        panic!(
            "fixture: `git {args:?}` failed:\n{}",
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

/// Initialises a real vault repository with an initial commit using the
/// `git` CLI: `main` branch, one commit, a test identity configured,
/// no remote.
///
/// # Panics
/// Panics if any git operation fails.
pub fn vault_repo(path: &Path) {
    git(path, &["init"]);
    git(path, &["config", "user.email", "test@test.com"]);
    git(path, &["config", "user.name", "Test User"]);
    git(path, &["config", "commit.gpgsign", "false"]);

    fs::write(path.join("welcome.md"), "# Vault\n")
        .unwrap_or_else(|e| panic!("vault_repo: failed to write welcome.md: {e}"));

    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Initial commit"]);
    // Best-effort: older git versions may not support this flag
    let _ = Command::new("git")
        .args(["branch", "-m", "main"])
        .current_dir(path)
        .output();
}

/// Initialises a vault repository tracking a local bare "remote".
///
/// The vault at `vault` clones nothing; instead a bare repository is
/// created at `remote`, added as `origin`, and the initial commit is
/// pushed with upstream tracking.
///
/// # Panics
/// Panics if any git operation fails.
pub fn vault_repo_with_remote(vault: &Path, remote: &Path) {
    let bare = git2::Repository::init_bare(remote).unwrap_or_else(|e| {
        panic!(
            "vault_repo_with_remote: failed to init bare remote at {}: {e}",
            remote.display()
        )
    });
    // A fresh bare repository inherits the host's init.defaultBranch
    // (often still `master`); pin HEAD so clones check out `main`.
    bare.set_head("refs/heads/main")
        .unwrap_or_else(|e| panic!("vault_repo_with_remote: failed to set HEAD: {e}"));

    vault_repo(vault);
    let remote_str = remote.to_str().expect("fixture paths are valid UTF-8");
    git(vault, &["remote", "add", "origin", remote_str]);
    git(vault, &["push", "--set-upstream", "origin", "main"]);
}

/// Commits a change to the remote through a scratch clone, simulating
/// another machine pushing while this one was offline.
///
/// # Panics
/// Panics if any git or filesystem operation fails.
pub fn push_remote_change(remote: &Path, scratch: &Path, file: &str, content: &str) {
    let remote_str = remote.to_str().expect("fixture paths are valid UTF-8");
    let scratch_str = scratch.to_str().expect("fixture paths are valid UTF-8");
    let parent = scratch
        .parent()
        .expect("scratch clone has a parent directory");

    git(parent, &["clone", remote_str, scratch_str]);
    git(scratch, &["config", "user.email", "other@test.com"]);
    git(scratch, &["config", "user.name", "Other User"]);
    git(scratch, &["config", "commit.gpgsign", "false"]);

    fs::write(scratch.join(file), content)
        .unwrap_or_else(|e| panic!("push_remote_change: failed to write {file}: {e}"));
    git(scratch, &["add", "."]);
    git(scratch, &["commit", "-m", "Remote change"]);
    git(scratch, &["push", "origin", "main"]);
}
