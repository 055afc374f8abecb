//! Carts and cart items.
//!
//! Two invariants live here (enforced by the store, stated on the types):
//! at most one cart per user carries `is_default = true`, and within a single
//! cart no two items reference the same product.

use campusmart_foundation::{CartId, CartItemId, ProductId, UserId};
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::product::Product;

/// A shopping cart. Container-only; items are separate rows.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cart {
    /// Surrogate key.
    pub id: CartId,
    /// Owning user.
    pub user_id: UserId,
    /// Display name.
    pub name: String,
    /// Whether this is the user's default cart. At most one per user.
    pub is_default: bool,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last mutation time.
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted when creating a cart.
#[derive(Debug, Clone)]
pub struct NewCart {
    /// Owning user.
    pub user_id: UserId,
    /// Display name; defaults to "My Cart".
    pub name: Option<String>,
    /// Default flag; defaults to false. Setting it true demotes every other
    /// cart of the same user.
    pub is_default: Option<bool>,
}

impl NewCart {
    /// Creates a cart input with the defaults unset.
    #[must_use]
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            name: None,
            is_default: None,
        }
    }
}

/// Partial cart update.
#[derive(Debug, Clone, Default)]
pub struct CartPatch {
    /// Replaces the display name.
    pub name: Option<String>,
    /// Replaces the default flag. `Some(true)` demotes sibling carts.
    pub is_default: Option<bool>,
}

/// A row inside a cart.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CartItem {
    /// Surrogate key.
    pub id: CartItemId,
    /// Owning cart.
    pub cart_id: CartId,
    /// Referenced product. May dangle if the product was since deleted.
    pub product_id: ProductId,
    /// Quantity, at least 1.
    pub quantity: i32,
    /// Whether this row is a rental rather than a purchase.
    pub is_rental: bool,
    /// Rental period start.
    pub rental_start_date: Option<DateTime<Utc>>,
    /// Rental period end.
    pub rental_end_date: Option<DateTime<Utc>>,
    /// Derived: ceiling of the rental span in days.
    pub rental_days: Option<i32>,
    /// When the row was added.
    pub added_at: DateTime<Utc>,
}

/// Fields accepted when adding a product to a cart.
#[derive(Debug, Clone)]
pub struct NewCartItem {
    /// Target cart.
    pub cart_id: CartId,
    /// Product to add.
    pub product_id: ProductId,
    /// Quantity; defaults to 1. Merged into an existing row when the cart
    /// already holds this product.
    pub quantity: Option<i32>,
    /// Rental flag; defaults to false.
    pub is_rental: Option<bool>,
    /// Rental period start.
    pub rental_start_date: Option<DateTime<Utc>>,
    /// Rental period end.
    pub rental_end_date: Option<DateTime<Utc>>,
    /// Rental span in days.
    pub rental_days: Option<i32>,
}

impl NewCartItem {
    /// Creates an add-to-cart input with quantity and rental fields unset.
    #[must_use]
    pub fn new(cart_id: CartId, product_id: ProductId) -> Self {
        Self {
            cart_id,
            product_id,
            quantity: None,
            is_rental: None,
            rental_start_date: None,
            rental_end_date: None,
            rental_days: None,
        }
    }

    /// Sets the quantity.
    #[must_use]
    pub fn with_quantity(mut self, quantity: i32) -> Self {
        self.quantity = Some(quantity);
        self
    }
}

/// A cart item joined with its product, computed on read.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CartItemWithProduct {
    /// The row.
    pub item: CartItem,
    /// The referenced product; `None` if it was deleted after being added.
    pub product: Option<Product>,
}

/// A cart joined with all of its items.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CartWithItems {
    /// The cart.
    pub cart: Cart,
    /// Its resolved items.
    pub items: Vec<CartItemWithProduct>,
}
