//! Expiry Sweep Task
//!
//! Background task that periodically removes expired cache entries, so
//! keys nobody reads again still get reclaimed.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Lifecycle of a sweep task. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweeperState {
    Running,
    Stopped,
}

// == Sweeper Handle ==
/// Owns one spawned sweep task and its stop signal.
#[derive(Debug)]
pub struct Sweeper {
    /// Sender to signal shutdown
    shutdown_tx: watch::Sender<bool>,
    /// Spawned loop, used to report state and to await exit
    handle: JoinHandle<()>,
}

impl Sweeper {
    /// Spawns a task that purges expired entries from `store` every
    /// `interval`.
    ///
    /// Each cycle checks the stop signal first, then purges under the store
    /// lock, then sleeps. The sleep is cut short by a stop signal. The task
    /// also exits once the returned handle is dropped.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<V>(store: Arc<Mutex<CacheStore<V>>>, interval: Duration) -> Self
    where
        V: Send + 'static,
    {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = tokio::spawn(sweep_loop(store, interval, shutdown_rx));

        Self {
            shutdown_tx,
            handle,
        }
    }

    /// Signals the task to stop without waiting for it. Idempotent.
    pub fn stop(&self) {
        if !self.shutdown_tx.send_replace(true) {
            info!("Expiry sweeper stop requested");
        }
    }

    /// Reports whether the task is still looping.
    pub fn state(&self) -> SweeperState {
        if self.handle.is_finished() {
            SweeperState::Stopped
        } else {
            SweeperState::Running
        }
    }

    /// Signals the task to stop and waits until it has exited.
    pub async fn shutdown(self) {
        self.stop();
        // A join error only means the task panicked or was aborted; it is gone either way
        if let Err(e) = self.handle.await {
            debug!("Expiry sweeper ended abnormally: {}", e);
        }
    }
}

/// The main sweep loop.
async fn sweep_loop<V>(
    store: Arc<Mutex<CacheStore<V>>>,
    interval: Duration,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    info!(
        "Starting expiry sweeper with interval of {} ms",
        interval.as_millis()
    );

    loop {
        if *shutdown_rx.borrow_and_update() {
            break;
        }

        // Scan and delete under one lock so no get/set interleaves with the pass
        let (removed, remaining) = {
            let mut guard = store.lock().await;
            let removed = guard.purge_expired();
            (removed, guard.len())
        };

        if removed > 0 {
            info!(
                "Expiry sweep: removed {} expired entries, {} remaining",
                removed, remaining
            );
        } else {
            debug!("Expiry sweep: no expired entries found");
        }

        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            changed = shutdown_rx.changed() => {
                if changed.is_err() {
                    debug!("Expiry sweeper handle dropped");
                    break;
                }
            }
        }
    }

    info!("Expiry sweeper stopped");
}
