//! In-memory relational store for the campusmart student marketplace.
//!
//! This crate provides:
//! - Entity records ([`User`], [`Product`], [`Cart`], [`Order`], ...) keyed by
//!   surrogate ids from `campusmart_foundation`
//! - Typed patch values for partial updates ([`UserPatch`], [`ProductPatch`],
//!   [`CartPatch`])
//! - Read projections joining parents with their children
//!   ([`CartWithItems`], [`OrderWithItems`], ...)
//! - [`Store`] - the single owner of every entity map and id counter, with
//!   the compound operations that keep cross-entity invariants intact
//! - [`seed_demo_catalog`] - demo fixture data for tests and demos
//!
//! The store runs single-threaded: no operation suspends mid-invariant, and
//! lookups signal absence with `Option` rather than an error. Input
//! validation belongs to the calling layer.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod cart;
mod message;
mod order;
mod product;
mod rental;
mod review;
mod seed;
mod store;
mod user;

pub use cart::{
    Cart, CartItem, CartItemWithProduct, CartPatch, CartWithItems, NewCart, NewCartItem,
};
pub use message::{Message, MessageWithUsers, NewMessage};
pub use order::{
    DeliveryMethod, NewOrder, NewOrderItem, Order, OrderItem, OrderItemWithProduct, OrderStatus,
    OrderWithItems,
};
pub use product::{NewProduct, Product, ProductFilter, ProductPatch, ProductWithSeller, SortKey};
pub use rental::{NewRental, Rental, RentalStatus, RentalWithDetails};
pub use review::{NewReview, Review, ReviewWithAuthor};
pub use seed::seed_demo_catalog;
pub use store::Store;
pub use user::{NewUser, User, UserPatch};
