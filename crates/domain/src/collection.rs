//! Record collection — the store's only data unit.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{BendeskError, ValidationError};

/// The full ordered set of estimate records.
///
/// Records are opaque JSON values; the store never inspects or constrains
/// their shape. The only invariant is that the collection as a whole is a
/// JSON array, and [`RecordCollection::from_value`] is the single place
/// that invariant is enforced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordCollection(Vec<Value>);

impl RecordCollection {
    /// Wrap an existing list of records.
    #[must_use]
    pub fn new(records: Vec<Value>) -> Self {
        Self(records)
    }

    /// Validate that `value` is a JSON array and wrap it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NotAnArray`] for any other JSON value
    /// (object, scalar, or null).
    pub fn from_value(value: Value) -> Result<Self, BendeskError> {
        match value {
            Value::Array(records) => Ok(Self(records)),
            _ => Err(ValidationError::NotAnArray.into()),
        }
    }

    /// Number of records in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the collection holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the underlying records.
    #[must_use]
    pub fn records(&self) -> &[Value] {
        &self.0
    }

    /// Consume the collection and return the underlying records.
    #[must_use]
    pub fn into_records(self) -> Vec<Value> {
        self.0
    }
}
