//! Error types for vault-git

/// Result type for vault-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in vault-git operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A git invocation that must succeed exited non-zero
    #[error("git {args} failed: {stderr}")]
    CommandFailed { args: String, stderr: String },

    /// The git process could not be spawned at all
    #[error("failed to run git: {0}")]
    Spawn(#[source] std::io::Error),
}
