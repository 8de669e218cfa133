//! # bendesk-domain
//!
//! Pure domain model for the bendesk bending-estimate service.
//!
//! ## Responsibilities
//! - Define the **record collection** — the single persisted data unit, an
//!   ordered sequence of opaque JSON values — and its one invariant
//!   (the collection is always a JSON array)
//! - Define the **price table** and the lookup rules for base bending prices
//! - Define the **estimate calculation** — bending cost, hole cost, and tax
//! - Error conventions shared across the workspace
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod collection;
pub mod error;
pub mod estimate;
pub mod pricing;
