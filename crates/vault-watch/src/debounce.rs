//! Trailing-edge debounce state machine
//!
//! States: **Armed** (waiting for the first activity) and **Cooldown**
//! (activity seen, waiting for silence). Any event during cooldown
//! re-arms the full window from zero; the sync hook fires only after a
//! complete window with no events, then the machine returns to Armed.
//!
//! All watched vaults share this one timer: an edit anywhere resets
//! the shared cooldown, and a fire syncs every vault in the same pass.
//!
//! Each wait is a single blocking select over three arms — next event,
//! window elapsed, shutdown requested — so the machine consumes no CPU
//! while idle or cooling down and still reacts promptly to a shutdown
//! that lands mid-cooldown.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time::{self, Instant};

use crate::events::ActivityEvent;

/// The debounce engine. Owns the event receiver for the session;
/// fires `on_settle` once per settled-activity window.
pub struct ChangeWatcher<F> {
    events: mpsc::UnboundedReceiver<ActivityEvent>,
    shutdown: watch::Receiver<bool>,
    window: Duration,
    on_settle: F,
}

impl<F: FnMut()> ChangeWatcher<F> {
    pub fn new(
        events: mpsc::UnboundedReceiver<ActivityEvent>,
        shutdown: watch::Receiver<bool>,
        window: Duration,
        on_settle: F,
    ) -> Self {
        Self {
            events,
            shutdown,
            window,
            on_settle,
        }
    }

    /// Run until shutdown is signalled or the event source closes.
    ///
    /// The hook runs on this task, so a fire delays shutdown handling
    /// until the sync pass completes — intentional, since the final
    /// sync must never overlap a debounce-triggered one.
    pub async fn run(mut self) {
        'armed: loop {
            // Armed: block until the first activity.
            tokio::select! {
                biased;
                _ = stopped(&mut self.shutdown) => break 'armed,
                event = self.events.recv() => {
                    if event.is_none() {
                        break 'armed;
                    }
                    tracing::debug!("activity observed, entering cooldown");
                }
            }

            // Cooldown: every further event re-arms the window from zero.
            loop {
                let deadline = Instant::now() + self.window;
                tokio::select! {
                    biased;
                    _ = stopped(&mut self.shutdown) => break 'armed,
                    event = self.events.recv() => {
                        if event.is_none() {
                            break 'armed;
                        }
                        tracing::trace!("activity during cooldown, window re-armed");
                    }
                    _ = time::sleep_until(deadline) => {
                        tracing::debug!("activity settled, firing sync pass");
                        (self.on_settle)();
                        continue 'armed;
                    }
                }
            }
        }
        tracing::debug!("watcher terminated");
    }
}

/// Resolves when shutdown is requested or the sender side is gone.
async fn stopped(shutdown: &mut watch::Receiver<bool>) {
    // A dropped sender also means the session is over.
    let _ = shutdown.wait_for(|stop| *stop).await;
}
