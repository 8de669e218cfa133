//! Storage port — the persistence boundary for the record collection.

use std::future::Future;

use bendesk_domain::collection::RecordCollection;
use bendesk_domain::error::BendeskError;

/// Persistence boundary for the estimate record collection.
///
/// The collection is the store's only data unit: it is loaded and replaced
/// wholesale, with no per-record addressing or partial mutation.
pub trait RecordStore {
    /// Load the stored collection.
    ///
    /// Implementations are expected to fail open: a missing or unreadable
    /// backing store yields an empty collection rather than an error.
    fn load(&self) -> impl Future<Output = Result<RecordCollection, BendeskError>> + Send;

    /// Replace the stored collection wholesale.
    fn save(
        &self,
        records: RecordCollection,
    ) -> impl Future<Output = Result<(), BendeskError>> + Send;
}
