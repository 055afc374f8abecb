//! Campusmart - in-memory relational store for a student marketplace
//!
//! This crate re-exports the member crates for convenient access. For
//! detailed documentation, see the individual crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: campusmart_store      - Entity records, queries, the Store
//! Layer 0: campusmart_foundation - Surrogate ids, allocators, ParseError
//! ```

pub use campusmart_foundation as foundation;
pub use campusmart_store as store;
