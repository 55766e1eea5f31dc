//! Lifecycle coordination for a supervised session
//!
//! Owns the supervised application's process handle and enforces the
//! session sequence: reconcile every vault, launch the application and
//! the watcher concurrently, block until the application exits (or the
//! coordinator is interrupted), stop the watcher completely, then run
//! exactly one final sync pass per vault.
//!
//! The final sync never overlaps the watcher — the watcher task is
//! stopped and awaited first, so two passes can never stage or commit
//! the same vault simultaneously.

use std::time::Duration;

use tokio::process::Command;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use vault_core::VaultStore;
use vault_git::{activity_message, reconcile, session_end_message, sync_all};
use vault_watch::{ChangeWatcher, FsEventSource};

use crate::error::Result;
use crate::notify;

/// One supervised session: vault store, debounce window, application.
pub struct LifecycleCoordinator {
    store: VaultStore,
    window: Duration,
    command: String,
    args: Vec<String>,
}

/// Aborts the watcher task on every exit path of the coordinator, so
/// an error return can never leak a task still blocked on its wait.
struct WatcherGuard {
    task: Option<JoinHandle<()>>,
}

impl WatcherGuard {
    fn new(task: JoinHandle<()>) -> Self {
        Self { task: Some(task) }
    }

    /// Wait for the watcher to terminate on its own (after shutdown
    /// was signalled). Disarms the guard.
    async fn join(mut self) {
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                tracing::warn!(error = %e, "watcher task did not shut down cleanly");
            }
        }
    }
}

impl Drop for WatcherGuard {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Resolves on Ctrl-C or, on unix, SIGTERM. Either way the session
/// continues through its shutdown sequence and final sync pass.
async fn interrupt() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut term = match signal(SignalKind::terminate()) {
            Ok(term) => term,
            Err(e) => {
                tracing::warn!(error = %e, "cannot listen for SIGTERM, handling Ctrl-C only");
                let _ = tokio::signal::ctrl_c().await;
                return;
            }
        };
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = term.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

impl LifecycleCoordinator {
    pub fn new(store: VaultStore, window: Duration, command: String, args: Vec<String>) -> Self {
        Self {
            store,
            window,
            command,
            args,
        }
    }

    /// Run the session to completion.
    ///
    /// # Errors
    ///
    /// Returns an error if the watcher cannot be started or the
    /// application cannot be launched. Per-vault git failures never
    /// abort the session.
    pub async fn run(self) -> Result<()> {
        self.preflight();

        // Watcher first: events during application startup are already
        // interesting. The event source must outlive the watcher task.
        let (source, events) = FsEventSource::start(&self.store)?;
        let (stop_tx, stop_rx) = watch::channel(false);

        let vaults = self.store.clone();
        let watcher = ChangeWatcher::new(events, stop_rx, self.window, move || {
            let reports = sync_all(&vaults, &activity_message());
            let committed = reports.iter().filter(|r| r.result.committed()).count();
            tracing::info!(vaults = reports.len(), committed, "debounce sync pass complete");
        });
        let guard = WatcherGuard::new(tokio::spawn(watcher.run()));

        let mut child = Command::new(&self.command)
            .args(&self.args)
            .kill_on_drop(true)
            .spawn()?;
        tracing::info!(app = %self.command, "supervised application launched");

        tokio::select! {
            status = child.wait() => match status {
                Ok(status) => tracing::info!(%status, "supervised application exited"),
                Err(e) => tracing::warn!(error = %e, "could not observe application exit"),
            },
            _ = interrupt() => {
                tracing::warn!("interrupted, terminating supervised application");
                if let Err(e) = child.kill().await {
                    tracing::warn!(error = %e, "failed to terminate application");
                }
            }
        }

        // Stop the watcher and wait for full termination before the
        // final pass. Idempotent: harmless if the watcher already
        // exited on its own.
        let _ = stop_tx.send(true);
        guard.join().await;
        drop(source);

        let reports = sync_all(&self.store, &session_end_message());
        let committed = reports.iter().filter(|r| r.result.committed()).count();
        tracing::info!(vaults = reports.len(), committed, "session-end sync complete");
        notify::session_complete(committed, reports.len());

        Ok(())
    }

    /// Reconcile every vault with its remote, once, before anything
    /// else runs. Failures are isolated per vault.
    fn preflight(&self) {
        for vault in &self.store {
            match reconcile(vault) {
                Ok(outcome) if outcome.needs_attention() => {
                    tracing::warn!(vault = %vault, ?outcome, "reconcile left conflicts to resolve");
                }
                Ok(outcome) => {
                    tracing::info!(vault = %vault, ?outcome, "reconciled");
                }
                Err(e) => {
                    tracing::warn!(vault = %vault, error = %e, "reconcile could not run");
                }
            }
        }
    }
}
