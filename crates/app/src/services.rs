//! Use-case services driving the domain.

pub mod estimate_service;
pub mod record_service;
