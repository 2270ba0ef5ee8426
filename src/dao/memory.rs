use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use futures::future::BoxFuture;

use crate::dao::storage::{StatsSnapshot, StatsStore, StorageError, StorageResult};

/// Stats store holding the snapshot in memory.
///
/// Used by the test suite; also usable for ephemeral deployments that do not
/// care about persistence across restarts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    snapshot: Arc<Mutex<StatsSnapshot>>,
    persist_calls: Arc<AtomicUsize>,
    fail_persist: Arc<AtomicBool>,
}

impl MemoryStore {
    /// Fresh, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last snapshot handed to [`StatsStore::persist`].
    pub fn current(&self) -> StatsSnapshot {
        self.snapshot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of completed persist calls.
    pub fn persist_calls(&self) -> usize {
        self.persist_calls.load(Ordering::SeqCst)
    }

    /// Make subsequent persist calls fail (or succeed again).
    pub fn set_fail_persist(&self, fail: bool) {
        self.fail_persist.store(fail, Ordering::SeqCst);
    }
}

impl StatsStore for MemoryStore {
    fn load(&self) -> BoxFuture<'static, StorageResult<StatsSnapshot>> {
        let snapshot = self.current();
        Box::pin(async move { Ok(snapshot) })
    }

    fn persist(&self, snapshot: StatsSnapshot) -> BoxFuture<'static, StorageResult<()>> {
        let slot = Arc::clone(&self.snapshot);
        let calls = Arc::clone(&self.persist_calls);
        let fail = self.fail_persist.load(Ordering::SeqCst);
        Box::pin(async move {
            if fail {
                return Err(StorageError::unavailable(
                    "persisting stats snapshot".into(),
                    std::io::Error::other("simulated failure"),
                ));
            }
            *slot.lock().unwrap_or_else(PoisonError::into_inner) = snapshot;
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
    }
}
