use std::collections::HashMap;
use std::error::Error;

use futures::future::BoxFuture;
use thiserror::Error;

use crate::dao::models::CommunityDocument;

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Full persisted state: one document per community.
pub type StatsSnapshot = HashMap<String, CommunityDocument>;

/// Error raised by storage backends regardless of the underlying medium.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend could not complete the operation.
    #[error("storage unavailable: {message}")]
    Unavailable {
        /// What the store was doing when it failed.
        message: String,
        /// Underlying backend failure.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}

impl StorageError {
    /// Construct an unavailable error from any backend failure.
    pub fn unavailable(message: String, source: impl Error + Send + Sync + 'static) -> Self {
        StorageError::Unavailable {
            message,
            source: Box::new(source),
        }
    }
}

/// Abstraction over the persistence layer for quiz statistics.
///
/// A failed [`persist`](StatsStore::persist) never corrupts gameplay: memory
/// stays authoritative and the flush task retries on the next mutation.
pub trait StatsStore: Send + Sync {
    /// Load every persisted community document.
    fn load(&self) -> BoxFuture<'static, StorageResult<StatsSnapshot>>;
    /// Persist a full snapshot, replacing any previous one.
    fn persist(&self, snapshot: StatsSnapshot) -> BoxFuture<'static, StorageResult<()>>;
}
