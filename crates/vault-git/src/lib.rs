//! Git operations for vaultwatch
//!
//! Drives the `git` CLI against vault working trees, relying only on
//! its exit-status contract (zero = success). Two operations live
//! here:
//!
//! - [`sync`] — stage, commit, and conditionally push one vault
//! - [`reconcile`] — the startup stash → pull → restore sequence
//!
//! Per-vault git failures (push rejected, pull offline, stash-pop
//! conflict) are not `Err` values: they are downgraded to warnings and
//! reported through [`vault_core::SyncResult`] and
//! [`vault_core::ReconcileOutcome`]. `Err` is reserved for conditions
//! like a missing `git` binary where the operation could not run at
//! all.

pub mod error;
pub mod reconcile;
pub mod repo;
pub mod sync;

pub use error::{Error, Result};
pub use reconcile::reconcile;
pub use repo::GitVault;
pub use sync::{activity_message, session_end_message, sync, sync_all, VaultReport};
