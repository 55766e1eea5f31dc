//! Vaults and the ordered vault store
//!
//! A vault is a directory tree designated for version-controlled
//! synchronization. Vaults are discovered outside this workspace (the
//! supervised application's own configuration is the source of truth)
//! and handed in as plain paths; the core only ever reads them.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A single directory tree under supervision.
///
/// Immutable for the process lifetime. Whether the vault is under
/// version control is probed lazily per operation, so a `git init`
/// performed while vaultwatch runs is picked up by the next pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vault {
    path: PathBuf,
}

impl Vault {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Absolute path of the vault root.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the vault carries a git repository.
    ///
    /// Vaults without one are silently skipped by every operation;
    /// this is not an error condition.
    pub fn has_repository(&self) -> bool {
        self.path.join(".git").exists()
    }

    /// Display name used in log lines and notifications.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

impl fmt::Display for Vault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// Ordered collection of discovered vaults.
///
/// Construction validates the set once at startup: it must be
/// non-empty and every path must be an existing directory. Order is
/// preserved so sync passes always visit vaults in the configured
/// order.
#[derive(Debug, Clone)]
pub struct VaultStore {
    vaults: Vec<Vault>,
}

impl VaultStore {
    /// Build a store from externally supplied paths.
    ///
    /// Paths are canonicalized so later `current_dir` handoffs and log
    /// lines agree on one spelling.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoVaults`] for an empty set and
    /// [`Error::VaultNotFound`] for a path that is not a directory.
    pub fn from_paths<I, P>(paths: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut vaults = Vec::new();
        for path in paths {
            let path = path.as_ref();
            if !path.is_dir() {
                return Err(Error::VaultNotFound {
                    path: path.to_path_buf(),
                });
            }
            let canonical = path.canonicalize()?;
            vaults.push(Vault::new(canonical));
        }

        if vaults.is_empty() {
            return Err(Error::NoVaults);
        }

        Ok(Self { vaults })
    }

    pub fn vaults(&self) -> &[Vault] {
        &self.vaults
    }

    pub fn len(&self) -> usize {
        self.vaults.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vaults.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vault> {
        self.vaults.iter()
    }
}

impl<'a> IntoIterator for &'a VaultStore {
    type Item = &'a Vault;
    type IntoIter = std::slice::Iter<'a, Vault>;

    fn into_iter(self) -> Self::IntoIter {
        self.vaults.iter()
    }
}
