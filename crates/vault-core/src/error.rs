//! Error types for vault-core

use std::path::PathBuf;

/// Result type for vault-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in vault-core operations
///
/// These are the startup-fatal conditions: anything here aborts the
/// session before the supervised application is launched. Per-vault
/// git failures are *not* errors — they are reported through
/// [`crate::SyncResult`] and [`crate::ReconcileOutcome`] and logged
/// as warnings.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Settings file was requested but does not exist
    #[error("Configuration not found at {path}")]
    ConfigurationMissing { path: PathBuf },

    /// No vaults were supplied via flags or the settings file
    #[error("No vaults configured; pass --vault or list vaults in the settings file")]
    NoVaults,

    /// A configured vault path does not exist or is not a directory
    #[error("Vault path is not a directory: {path}")]
    VaultNotFound { path: PathBuf },

    /// A required external tool is missing from PATH
    #[error("Required dependency '{program}' not found on PATH")]
    DependencyMissing { program: String },

    /// The filesystem watcher could not be started
    #[error("Failed to start filesystem watcher: {message}")]
    WatchStart { message: String },

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// TOML deserialization error
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),
}
