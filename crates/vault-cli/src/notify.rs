//! Desktop notification side effect
//!
//! Fire-and-forget: a missing notification tool never affects the
//! session outcome, it is only logged at debug level.

use std::process::Command;

/// Announce session completion on the desktop.
pub fn session_complete(synced: usize, total: usize) {
    let body = format!("Session ended: {synced} of {total} vaults left committed");
    send("vaultwatch", &body);
}

#[cfg(target_os = "linux")]
fn send(summary: &str, body: &str) {
    let result = Command::new("notify-send").args([summary, body]).spawn();
    if let Err(e) = result {
        tracing::debug!(error = %e, "desktop notification unavailable");
    }
}

#[cfg(target_os = "macos")]
fn send(summary: &str, body: &str) {
    let script = format!("display notification \"{body}\" with title \"{summary}\"");
    let result = Command::new("osascript").args(["-e", &script]).spawn();
    if let Err(e) = result {
        tracing::debug!(error = %e, "desktop notification unavailable");
    }
}

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
fn send(summary: &str, body: &str) {
    tracing::info!(summary, body, "session notification");
}
