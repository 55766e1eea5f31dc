//! Core types for vaultwatch
//!
//! This crate holds the leaf data model shared by the rest of the
//! workspace:
//!
//! - **Vault / VaultStore**: the directories under supervision
//! - **SyncResult / ReconcileOutcome**: per-vault operation outcomes
//! - **Settings**: session configuration (debounce window, supervised
//!   application command), loadable from a TOML file
//!
//! It deliberately contains no git or filesystem-watching logic; those
//! live in `vault-git` and `vault-watch`.

pub mod error;
pub mod outcome;
pub mod settings;
pub mod vault;

pub use error::{Error, Result};
pub use outcome::{ReconcileOutcome, SyncResult};
pub use settings::Settings;
pub use vault::{Vault, VaultStore};
