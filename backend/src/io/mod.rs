//! # IO Module
//!
//! Adapter layer between HTTP clients and the domain.
//!
//! Requests are parsed into domain queries, run against the shared immutable
//! table, and the resulting views are mapped to the DTOs of the `shared` crate.
//! Domain code never sees axum types and handlers hold no business rules.

pub mod rest;

pub use rest::*;
