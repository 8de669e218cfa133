//! File-backed JSON record store.

use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tokio::sync::Mutex;

use bendesk_app::ports::RecordStore;
use bendesk_domain::collection::RecordCollection;
use bendesk_domain::error::BendeskError;

use crate::error::StorageError;

/// Record store backed by a single JSON file.
///
/// The file holds the whole collection as one pretty-printed JSON array
/// with non-ASCII characters emitted literally. Loads fail open: a
/// missing, unreadable, or corrupt file is served as an empty collection.
/// Saves replace the file wholesale via a temp-file rename, serialized
/// behind a process-local lock so concurrent saves cannot tear the file.
pub struct JsonFileRecordStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileRecordStore {
    /// Create a store backed by the file at `path`.
    ///
    /// Neither the file nor its parent directory needs to exist yet; both
    /// are created on the first save.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for JsonFileRecordStore {
    fn load(&self) -> impl Future<Output = Result<RecordCollection, BendeskError>> + Send {
        async move {
            let raw = match tokio::fs::read(&self.path).await {
                Ok(raw) => raw,
                Err(err) if err.kind() == ErrorKind::NotFound => {
                    return Ok(RecordCollection::default());
                }
                Err(err) => {
                    tracing::warn!(
                        path = %self.path.display(),
                        error = %err,
                        "record file unreadable, serving empty collection"
                    );
                    return Ok(RecordCollection::default());
                }
            };

            match serde_json::from_slice::<Value>(&raw) {
                Ok(Value::Array(records)) => Ok(RecordCollection::new(records)),
                Ok(_) | Err(_) => {
                    tracing::warn!(
                        path = %self.path.display(),
                        "record file is not a JSON array, serving empty collection"
                    );
                    Ok(RecordCollection::default())
                }
            }
        }
    }

    fn save(
        &self,
        records: RecordCollection,
    ) -> impl Future<Output = Result<(), BendeskError>> + Send {
        async move {
            let json =
                serde_json::to_vec_pretty(records.records()).map_err(StorageError::Serialize)?;

            let _guard = self.write_lock.lock().await;

            let parent = self.path.parent().filter(|dir| !dir.as_os_str().is_empty());
            if let Some(parent) = parent {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(StorageError::Write)?;
            }

            // Write-then-rename keeps a concurrent reader from ever seeing
            // a half-written collection.
            let tmp = self.path.with_extension("json.tmp");
            tokio::fs::write(&tmp, &json)
                .await
                .map_err(StorageError::Write)?;
            tokio::fs::rename(&tmp, &self.path)
                .await
                .map_err(StorageError::Write)?;

            Ok(())
        }
    }
}
