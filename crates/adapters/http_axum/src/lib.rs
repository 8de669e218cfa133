//! # bendesk-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **record store endpoint** (`/api/records`): the whole
//!   collection is returned on GET and replaced wholesale on POST
//! - Serve the **estimate endpoint** (`/api/estimate`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into JSON responses, including the fixed
//!   error bodies and permissive CORS the browser clients rely on
//!
//! ## Dependency rule
//! Depends on `bendesk-app` (for port traits and services) and
//! `bendesk-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
