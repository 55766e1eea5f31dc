//! Filesystem watching and debounce for vaultwatch
//!
//! Two halves:
//!
//! - [`events`]: a [`notify`]-backed event source that watches every
//!   vault recursively and forwards opaque [`events::ActivityEvent`]s,
//!   filtering out repository metadata so the sync engine's own writes
//!   never re-trigger the watcher.
//! - [`debounce`]: the Armed/Cooldown trailing-edge debounce machine.
//!   It blocks on a single three-arm select (next event, window
//!   elapsed, shutdown) — no polling, zero CPU across multi-hour idle
//!   gaps — and fires its sync hook only after a full window of
//!   silence.
//!
//! The two halves are joined by a plain channel, so the machine is
//! testable against fabricated event sequences without touching the
//! filesystem.

pub mod debounce;
pub mod events;

pub use debounce::ChangeWatcher;
pub use events::{ActivityEvent, FsEventSource};
