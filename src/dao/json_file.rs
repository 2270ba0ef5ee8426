use std::io::ErrorKind;
use std::path::PathBuf;

use futures::future::BoxFuture;

use crate::dao::storage::{StatsSnapshot, StatsStore, StorageError, StorageResult};

/// Stats store keeping the whole snapshot in a single JSON file.
///
/// Writes go through a sibling temp file followed by a rename so a crash
/// mid-write never leaves a truncated document behind.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StatsStore for JsonFileStore {
    fn load(&self) -> BoxFuture<'static, StorageResult<StatsSnapshot>> {
        let path = self.path.clone();
        Box::pin(async move {
            let contents = match tokio::fs::read(&path).await {
                Ok(contents) => contents,
                Err(err) if err.kind() == ErrorKind::NotFound => {
                    return Ok(StatsSnapshot::default());
                }
                Err(err) => {
                    return Err(StorageError::unavailable(
                        format!("reading stats file {}", path.display()),
                        err,
                    ));
                }
            };
            serde_json::from_slice(&contents).map_err(|err| {
                StorageError::unavailable(
                    format!("parsing stats file {}", path.display()),
                    err,
                )
            })
        })
    }

    fn persist(&self, snapshot: StatsSnapshot) -> BoxFuture<'static, StorageResult<()>> {
        let path = self.path.clone();
        Box::pin(async move {
            let contents = serde_json::to_vec_pretty(&snapshot).map_err(|err| {
                StorageError::unavailable("serializing stats snapshot".into(), err)
            })?;

            let mut tmp = path.clone().into_os_string();
            tmp.push(".tmp");
            let tmp = PathBuf::from(tmp);

            tokio::fs::write(&tmp, &contents).await.map_err(|err| {
                StorageError::unavailable(
                    format!("writing stats file {}", tmp.display()),
                    err,
                )
            })?;
            tokio::fs::rename(&tmp, &path).await.map_err(|err| {
                StorageError::unavailable(
                    format!("replacing stats file {}", path.display()),
                    err,
                )
            })
        })
    }
}
