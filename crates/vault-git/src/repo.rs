//! Thin wrapper over the `git` CLI for one vault
//!
//! Every invocation sets the vault root as the child process's working
//! directory, so the caller's own working directory is never touched
//! and operations on different vaults are independent.

use std::process::Command;

use vault_core::Vault;

use crate::{Error, Result};

/// Captured result of one git invocation.
#[derive(Debug)]
pub struct GitOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Git command surface for a single vault.
pub struct GitVault<'a> {
    vault: &'a Vault,
}

impl<'a> GitVault<'a> {
    pub fn new(vault: &'a Vault) -> Self {
        Self { vault }
    }

    /// Run a git command, capturing output and exit status.
    ///
    /// A non-zero exit is *not* an error here — callers decide whether
    /// a failure is fatal, downgraded, or part of the contract (e.g. a
    /// stash-pop conflict).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Spawn`] only if the process could not be
    /// started.
    pub fn git(&self, args: &[&str]) -> Result<GitOutput> {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.vault.path())
            .output()
            .map_err(Error::Spawn)?;

        Ok(GitOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }

    /// Run a git command that must succeed, returning trimmed stdout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CommandFailed`] on a non-zero exit.
    pub fn git_ok(&self, args: &[&str]) -> Result<String> {
        let output = self.git(args)?;
        if output.success {
            Ok(output.stdout)
        } else {
            Err(Error::CommandFailed {
                args: args.join(" "),
                stderr: output.stderr,
            })
        }
    }

    /// Whether the working tree has modifications or untracked files.
    pub fn is_dirty(&self) -> Result<bool> {
        let status = self.git_ok(&["status", "--porcelain"])?;
        Ok(!status.is_empty())
    }

    /// Whether any remote is configured.
    pub fn has_remote(&self) -> Result<bool> {
        let remotes = self.git_ok(&["remote"])?;
        Ok(!remotes.is_empty())
    }
}
