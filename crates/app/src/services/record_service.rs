//! Record service — use-cases for the estimate record collection.

use bendesk_domain::collection::RecordCollection;
use bendesk_domain::error::BendeskError;

use crate::ports::RecordStore;

/// Application service for reading and replacing the record collection.
///
/// There is deliberately no per-record operation here: the collection is
/// the unit of storage, so the service surface is load-whole and
/// replace-whole.
pub struct RecordService<S> {
    store: S,
}

impl<S: RecordStore> RecordService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the whole collection.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store. Stores that fail
    /// open (the file-backed one does) never return one from a load.
    pub async fn list_records(&self) -> Result<RecordCollection, BendeskError> {
        self.store.load().await
    }

    /// Replace the whole collection.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store when the write
    /// fails; the previous contents are not restored.
    pub async fn replace_records(&self, records: RecordCollection) -> Result<(), BendeskError> {
        self.store.save(records).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryStore {
        records: Mutex<RecordCollection>,
    }

    impl RecordStore for InMemoryStore {
        fn load(&self) -> impl Future<Output = Result<RecordCollection, BendeskError>> + Send {
            let records = self.records.lock().unwrap().clone();
            async { Ok(records) }
        }

        fn save(
            &self,
            records: RecordCollection,
        ) -> impl Future<Output = Result<(), BendeskError>> + Send {
            *self.records.lock().unwrap() = records;
            async { Ok(()) }
        }
    }

    struct FailingStore;

    impl RecordStore for FailingStore {
        fn load(&self) -> impl Future<Output = Result<RecordCollection, BendeskError>> + Send {
            async { Ok(RecordCollection::default()) }
        }

        fn save(
            &self,
            _records: RecordCollection,
        ) -> impl Future<Output = Result<(), BendeskError>> + Send {
            async {
                Err(BendeskError::Storage(Box::new(std::io::Error::other(
                    "Failed to write file",
                ))))
            }
        }
    }

    #[tokio::test]
    async fn should_return_empty_collection_before_first_replace() {
        let svc = RecordService::new(InMemoryStore::default());
        let records = svc.list_records().await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn should_roundtrip_collection_through_replace_and_list() {
        let svc = RecordService::new(InMemoryStore::default());
        let records = RecordCollection::new(vec![json!({"形状": "L曲げ", "total": 500})]);

        svc.replace_records(records.clone()).await.unwrap();

        let listed = svc.list_records().await.unwrap();
        assert_eq!(listed, records);
    }

    #[tokio::test]
    async fn should_replace_wholesale_not_merge() {
        let svc = RecordService::new(InMemoryStore::default());
        let first = RecordCollection::new(vec![json!({"id": 1}), json!({"id": 2})]);
        let second = RecordCollection::new(vec![json!({"id": 3})]);

        svc.replace_records(first).await.unwrap();
        svc.replace_records(second.clone()).await.unwrap();

        let listed = svc.list_records().await.unwrap();
        assert_eq!(listed, second);
    }

    #[tokio::test]
    async fn should_propagate_storage_error_from_replace() {
        let svc = RecordService::new(FailingStore);
        let result = svc
            .replace_records(RecordCollection::new(vec![json!(1)]))
            .await;
        assert!(matches!(result, Err(BendeskError::Storage(_))));
    }
}
