//! # bendesk-adapter-storage-file
//!
//! Flat-file persistence adapter.
//!
//! ## Responsibilities
//! - Implement the `RecordStore` port against a single JSON file holding
//!   the whole collection (pretty-printed, non-ASCII emitted literally)
//! - Implement the `PriceTableSource` port against the bending price CSV
//! - Map IO failures into the workspace error conventions
//!
//! ## Dependency rule
//! Depends on `bendesk-app` (for port traits) and `bendesk-domain` (for
//! domain types). The `app` and `domain` crates must never reference this
//! adapter.

pub mod error;
pub mod price_table;
pub mod record_store;

pub use error::StorageError;
pub use price_table::CsvPriceTableSource;
pub use record_store::JsonFileRecordStore;
