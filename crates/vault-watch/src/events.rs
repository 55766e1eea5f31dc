//! Filesystem event source for watched vaults
//!
//! Bridges [`notify`]'s callback thread into a tokio channel. Events
//! carry no payload — the debounce machine only needs to know that
//! *something* changed somewhere under some vault.

use std::path::Path;

use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use vault_core::{Error, Result, VaultStore};

/// Opaque signal: some file under some watched vault was written or
/// moved. Consumed immediately by the debounce machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityEvent;

/// Live filesystem watch over a vault store.
///
/// Holds the underlying [`RecommendedWatcher`]; dropping this value
/// stops observation. The receiving half of the channel is handed to
/// the debounce machine.
pub struct FsEventSource {
    // Kept alive for the duration of the session; watches stop on drop.
    _watcher: RecommendedWatcher,
}

impl FsEventSource {
    /// Start watching every vault in the store recursively.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WatchStart`] if the platform watcher cannot be
    /// created or a vault cannot be observed. This aborts startup —
    /// a session without a working watcher is meaningless.
    pub fn start(store: &VaultStore) -> Result<(Self, mpsc::UnboundedReceiver<ActivityEvent>)> {
        let (tx, rx) = mpsc::unbounded_channel();

        let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
            match res {
                Ok(event) => {
                    if is_activity(&event) {
                        // Receiver gone means the session is over.
                        let _ = tx.send(ActivityEvent);
                    }
                }
                Err(e) => tracing::warn!(error = %e, "filesystem watch error"),
            }
        })
        .map_err(|e| Error::WatchStart {
            message: e.to_string(),
        })?;

        for vault in store {
            watcher
                .watch(vault.path(), RecursiveMode::Recursive)
                .map_err(|e| Error::WatchStart {
                    message: format!("cannot watch {}: {e}", vault),
                })?;
            tracing::debug!(vault = %vault, "watching recursively");
        }

        Ok((Self { _watcher: watcher }, rx))
    }
}

/// Whether a raw notify event counts as vault activity.
///
/// Access events are noise, and anything under a `.git` directory is
/// the sync engine's (or git's) own work — forwarding those would
/// create a feedback loop where every commit re-arms the debounce.
fn is_activity(event: &notify::Event) -> bool {
    if matches!(event.kind, EventKind::Access(_)) {
        return false;
    }
    event.paths.iter().any(|p| !is_repository_metadata(p))
}

/// Whether the path lies inside a repository metadata directory.
fn is_repository_metadata(path: &Path) -> bool {
    path.components().any(|c| c.as_os_str() == ".git")
}
