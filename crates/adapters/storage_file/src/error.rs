//! Storage-specific error types for the file-backed adapters.

use bendesk_domain::error::BendeskError;

/// Errors originating from the file storage layer.
///
/// Display strings are the messages callers see in error responses, so the
/// write variants carry the fixed message the record endpoint promises.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The record collection could not be written out.
    #[error("Failed to write file")]
    Write(#[source] std::io::Error),

    /// The record collection could not be serialized.
    #[error("Failed to write file")]
    Serialize(#[source] serde_json::Error),

    /// The price table could not be read or parsed.
    #[error("Failed to load price table")]
    PriceTable(#[from] csv::Error),
}

impl From<StorageError> for BendeskError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
