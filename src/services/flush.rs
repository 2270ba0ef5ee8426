//! Debounced persistence: one writer task coalescing bursts of mutations.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::dao::storage::StatsStore;
use crate::state::SharedState;

/// Handle to the background flush task.
///
/// Mutating code calls [`mark_dirty`](FlushHandle::mark_dirty) after every
/// stats change; the task waits for a quiet period before serializing the
/// state, so bursts collapse into one write. A failed write is logged and
/// the in-memory state stays authoritative; the next mutation re-arms the
/// writer.
pub struct FlushHandle {
    dirty: Arc<Notify>,
    worker: Mutex<Option<JoinHandle<()>>>,
    state: SharedState,
    store: Arc<dyn StatsStore>,
}

impl FlushHandle {
    /// Spawn the writer task.
    pub fn spawn(state: SharedState, store: Arc<dyn StatsStore>, debounce: Duration) -> Self {
        let dirty = Arc::new(Notify::new());
        let worker = tokio::spawn(run_writer(
            Arc::clone(&dirty),
            Arc::clone(&state),
            Arc::clone(&store),
            debounce,
        ));
        Self {
            dirty,
            worker: Mutex::new(Some(worker)),
            state,
            store,
        }
    }

    /// Signal that the state changed and should be persisted soon.
    pub fn mark_dirty(&self) {
        self.dirty.notify_one();
    }

    /// Stop the writer and perform one final synchronous-best-effort flush.
    pub async fn shutdown(&self) {
        let worker = self
            .worker
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(worker) = worker {
            worker.abort();
        }
        if let Err(err) = self.store.persist(self.state.snapshot()).await {
            warn!(error = %err, "final stats flush failed");
        }
    }
}

async fn run_writer(
    dirty: Arc<Notify>,
    state: SharedState,
    store: Arc<dyn StatsStore>,
    debounce: Duration,
) {
    loop {
        dirty.notified().await;

        // Quiet period: every further mutation restarts the debounce timer.
        loop {
            tokio::select! {
                _ = sleep(debounce) => break,
                _ = dirty.notified() => {}
            }
        }

        let snapshot = state.snapshot();
        match store.persist(snapshot).await {
            Ok(()) => debug!("stats snapshot persisted"),
            Err(err) => {
                warn!(error = %err, "stats flush failed; will retry on next mutation");
            }
        }
    }
}
