//! Debounce machine wired to the real sync engine over temporary
//! repositories: a settled-activity window syncs every vault in the
//! same pass, exactly as a live session would.

use std::fs;
use std::sync::mpsc as std_mpsc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use tokio::sync::{mpsc, watch};
use tokio::time;

use vault_core::{SyncResult, VaultStore};
use vault_git::sync_all;
use vault_watch::{ActivityEvent, ChangeWatcher};
use vault_test_utils::git::vault_repo;

const WINDOW: Duration = Duration::from_secs(60);

async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn debounce_fire_syncs_every_vault_in_one_pass() {
    let temp = TempDir::new().unwrap();
    let dirty = temp.path().join("dirty");
    let clean = temp.path().join("clean");
    fs::create_dir(&dirty).unwrap();
    fs::create_dir(&clean).unwrap();
    vault_repo(&dirty);
    vault_repo(&clean);
    fs::write(dirty.join("note.md"), "edited during session").unwrap();

    let store = VaultStore::from_paths([&dirty, &clean]).unwrap();
    let (tx, rx) = mpsc::unbounded_channel();
    let (stop_tx, stop_rx) = watch::channel(false);
    let (report_tx, report_rx) = std_mpsc::channel();

    let vaults = store.clone();
    let watcher = ChangeWatcher::new(rx, stop_rx, WINDOW, move || {
        let reports = sync_all(&vaults, "debounce pass");
        report_tx.send(reports).unwrap();
    });
    let task = tokio::spawn(watcher.run());

    tx.send(ActivityEvent).unwrap();
    settle().await;
    time::advance(WINDOW).await;
    settle().await;

    let reports = report_rx.try_recv().expect("one pass fired");
    let results: Vec<_> = reports.iter().map(|r| r.result).collect();
    assert_eq!(results, vec![SyncResult::Committed, SyncResult::Clean]);
    assert!(
        report_rx.try_recv().is_err(),
        "a single settled window fires a single pass"
    );

    stop_tx.send(true).unwrap();
    task.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn shutdown_mid_cooldown_leaves_the_final_pass_to_the_coordinator() {
    let temp = TempDir::new().unwrap();
    vault_repo(temp.path());
    fs::write(temp.path().join("note.md"), "unsettled edit").unwrap();

    let store = VaultStore::from_paths([temp.path()]).unwrap();
    let (tx, rx) = mpsc::unbounded_channel();
    let (stop_tx, stop_rx) = watch::channel(false);
    let (report_tx, report_rx) = std_mpsc::channel();

    let vaults = store.clone();
    let watcher = ChangeWatcher::new(rx, stop_rx, WINDOW, move || {
        report_tx.send(sync_all(&vaults, "debounce pass")).unwrap();
    });
    let task = tokio::spawn(watcher.run());

    // Activity at t=5s, app exit at t=30s: the watcher must stop
    // without waiting out the window and without firing.
    time::advance(Duration::from_secs(5)).await;
    tx.send(ActivityEvent).unwrap();
    settle().await;
    time::advance(Duration::from_secs(25)).await;
    settle().await;

    stop_tx.send(true).unwrap();
    task.await.unwrap();
    assert!(report_rx.try_recv().is_err(), "no debounce pass fired");

    // The coordinator's guaranteed pass still commits the edit, once.
    let reports = sync_all(&store, "vault sync (session end)");
    assert_eq!(reports[0].result, SyncResult::Committed);
    assert_eq!(sync_all(&store, "again")[0].result, SyncResult::Clean);
}
