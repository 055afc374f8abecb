//! Surrogate keys, id allocation, and shared error types for campusmart.
//!
//! This crate provides:
//! - Id newtypes ([`UserId`], [`ProductId`], [`CartId`], ...) — one per entity
//! - [`IdGen`] - Monotonic per-entity id allocation
//! - [`ParseError`] - Error for domain-enum parsing

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod id;

pub use error::ParseError;
pub use id::{
    CartId, CartItemId, IdGen, MessageId, OrderId, OrderItemId, ProductId, RawId, RentalId,
    ReviewId, SurrogateId, UserId,
};
