//! Common error types used across the workspace.

use std::error::Error;

/// Top-level error for domain and application operations.
///
/// Each layer defines its own typed errors and converts into this enum;
/// the HTTP adapter maps the variants to response statuses in one place.
#[derive(Debug, thiserror::Error)]
pub enum BendeskError {
    /// A request failed a domain invariant.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The storage layer failed.
    #[error("{0}")]
    Storage(Box<dyn Error + Send + Sync>),
}

/// Violations of domain invariants.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The submitted collection was not a JSON array.
    #[error("Invalid JSON array")]
    NotAnArray,

    /// The requested bend shape has no rows in the price table.
    #[error("unknown shape: {0}")]
    UnknownShape(String),
}
