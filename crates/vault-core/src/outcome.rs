//! Per-vault operation outcomes
//!
//! Produced by the sync engine and the preflight reconciler, consumed
//! for logging and `--json` reports only; never persisted.

use serde::{Deserialize, Serialize};

/// Outcome of a single sync pass over one vault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SyncResult {
    /// Nothing to commit (also returned for vaults without a repository)
    Clean,
    /// Changes committed; no remote configured, so no push attempted
    Committed,
    /// Changes committed and pushed to the configured remote
    CommittedAndPushed,
    /// The commit itself failed (e.g. hook rejection); no retry
    CommitFailed,
    /// Committed locally but the push failed; the next pass retries implicitly
    PushFailed,
}

impl SyncResult {
    /// Whether the pass left new local history behind.
    pub fn committed(self) -> bool {
        matches!(
            self,
            Self::Committed | Self::CommittedAndPushed | Self::PushFailed
        )
    }
}

/// Outcome of the one-time preflight reconciliation of one vault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReconcileOutcome {
    /// Working tree was clean; pull applied (or was a no-op)
    AlreadyClean,
    /// Local edits were stashed across the pull and restored cleanly
    StashedAndRestored,
    /// Restoring local edits conflicted; left for the user to resolve
    StashedAndConflicted,
    /// The pull failed (no remote, no connectivity); local files kept as-is
    PullFailed,
}

impl ReconcileOutcome {
    /// Whether the outcome demands user attention before the session
    /// is trustworthy.
    pub fn needs_attention(self) -> bool {
        matches!(self, Self::StashedAndConflicted)
    }
}
