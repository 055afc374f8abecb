//! Integration tests for the marketplace store.
//!
//! Tests users, products, carts, orders, reviews, rentals, and messaging,
//! with a focus on the cross-entity invariants.

mod common;

mod carts;
mod messages;
mod rentals;
mod reviews;
