//! # bendesk-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `RecordStore` — load & replace the estimate record collection
//!   - `PriceTableSource` — load the bending price table
//! - Provide **use-case services** driving the domain:
//!   - `RecordService` — list and replace the record collection
//!   - `EstimateService` — compute estimates against the current table
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `bendesk-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
