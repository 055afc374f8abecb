//! Cart and cart-item operations.
//!
//! Two invariants are enforced here: a user has at most one default cart,
//! and within a cart every product appears in at most one row (collisions
//! merge quantities instead of duplicating the row).

use campusmart_foundation::{CartId, CartItemId, ProductId, UserId};
use chrono::{DateTime, Utc};

use crate::cart::{
    Cart, CartItem, CartItemWithProduct, CartPatch, CartWithItems, NewCart, NewCartItem,
};
use crate::store::Store;

impl Store {
    /// Creates a cart. A true `is_default` demotes the user's other carts
    /// first, so the single-default invariant holds on return.
    pub fn create_cart(&mut self, new: NewCart) -> Cart {
        let id = self.cart_ids.mint();
        let now = Utc::now();
        let cart = Cart {
            id,
            user_id: new.user_id,
            name: new.name.unwrap_or_else(|| "My Cart".to_owned()),
            is_default: new.is_default.unwrap_or(false),
            created_at: now,
            updated_at: now,
        };
        if cart.is_default {
            self.clear_default_flags(cart.user_id, id);
        }
        self.carts.insert(id, cart.clone());
        tracing::debug!(cart = %id, user = %cart.user_id, default = cart.is_default, "created cart");
        cart
    }

    /// All carts of a user, each joined with its items.
    #[must_use]
    pub fn carts(&self, user_id: UserId) -> Vec<CartWithItems> {
        self.carts
            .values()
            .filter(|cart| cart.user_id == user_id)
            .map(|cart| CartWithItems {
                cart: cart.clone(),
                items: self.cart_items(cart.id),
            })
            .collect()
    }

    /// Looks up a cart joined with its items.
    #[must_use]
    pub fn cart(&self, id: CartId) -> Option<CartWithItems> {
        let cart = self.carts.get(&id)?;
        Some(CartWithItems {
            cart: cart.clone(),
            items: self.cart_items(id),
        })
    }

    /// The user's default cart with its items, if one exists.
    #[must_use]
    pub fn default_cart(&self, user_id: UserId) -> Option<CartWithItems> {
        let cart = self
            .carts
            .values()
            .find(|cart| cart.user_id == user_id && cart.is_default)?;
        Some(CartWithItems {
            cart: cart.clone(),
            items: self.cart_items(cart.id),
        })
    }

    /// Applies a partial cart update and refreshes `updated_at`. A patch that
    /// sets `is_default` demotes the user's other carts.
    pub fn update_cart(&mut self, id: CartId, patch: CartPatch) -> Option<Cart> {
        let user_id = self.carts.get(&id)?.user_id;
        if patch.is_default == Some(true) {
            self.clear_default_flags(user_id, id);
        }
        let cart = self.carts.get_mut(&id)?;
        if let Some(name) = patch.name {
            cart.name = name;
        }
        if let Some(is_default) = patch.is_default {
            cart.is_default = is_default;
        }
        cart.updated_at = Utc::now();
        Some(cart.clone())
    }

    /// Makes `cart_id` the user's default cart. Returns `None` when the cart
    /// is missing or owned by a different user. Idempotent.
    pub fn set_default_cart(&mut self, user_id: UserId, cart_id: CartId) -> Option<Cart> {
        let cart = self.carts.get(&cart_id)?;
        if cart.user_id != user_id {
            return None;
        }
        self.clear_default_flags(user_id, cart_id);
        let cart = self.carts.get_mut(&cart_id)?;
        cart.is_default = true;
        tracing::debug!(cart = %cart_id, user = %user_id, "switched default cart");
        Some(cart.clone())
    }

    /// Deletes a cart along with every item in it. Returns false when no
    /// such cart exists.
    pub fn delete_cart(&mut self, id: CartId) -> bool {
        if self.carts.remove(&id).is_none() {
            return false;
        }
        let item_ids: Vec<CartItemId> = self
            .cart_items
            .values()
            .filter(|item| item.cart_id == id)
            .map(|item| item.id)
            .collect();
        for item_id in item_ids {
            self.cart_items.remove(&item_id);
        }
        true
    }

    fn clear_default_flags(&mut self, user_id: UserId, keep: CartId) {
        let demote: Vec<CartId> = self
            .carts
            .values()
            .filter(|cart| cart.user_id == user_id && cart.is_default && cart.id != keep)
            .map(|cart| cart.id)
            .collect();
        for cart_id in demote {
            if let Some(cart) = self.carts.get_mut(&cart_id) {
                cart.is_default = false;
            }
        }
    }

    /// A cart's items, each joined with its product. Rows whose product was
    /// deleted survive with `product: None`.
    #[must_use]
    pub fn cart_items(&self, cart_id: CartId) -> Vec<CartItemWithProduct> {
        self.cart_items
            .values()
            .filter(|item| item.cart_id == cart_id)
            .map(|item| CartItemWithProduct {
                item: item.clone(),
                product: self.products.get(&item.product_id).cloned(),
            })
            .collect()
    }

    /// Finds the row holding `product_id` in `cart_id`, if any.
    #[must_use]
    pub fn cart_item(&self, cart_id: CartId, product_id: ProductId) -> Option<&CartItem> {
        self.cart_items
            .values()
            .find(|item| item.cart_id == cart_id && item.product_id == product_id)
    }

    /// Looks up a cart row by id.
    #[must_use]
    pub fn cart_item_by_id(&self, id: CartItemId) -> Option<&CartItem> {
        self.cart_items.get(&id)
    }

    /// Adds a product to a cart. When the cart already holds the product the
    /// incoming quantity (default 1) is merged into the existing row and the
    /// row's other fields are left alone.
    pub fn add_to_cart(&mut self, new: NewCartItem) -> CartItem {
        let quantity = new.quantity.unwrap_or(1);
        let existing = self
            .cart_item(new.cart_id, new.product_id)
            .map(|item| item.id);
        if let Some(id) = existing {
            if let Some(item) = self.cart_items.get_mut(&id) {
                item.quantity += quantity;
                return item.clone();
            }
        }

        let id = self.cart_item_ids.mint();
        let item = CartItem {
            id,
            cart_id: new.cart_id,
            product_id: new.product_id,
            quantity,
            is_rental: new.is_rental.unwrap_or(false),
            rental_start_date: new.rental_start_date,
            rental_end_date: new.rental_end_date,
            rental_days: new.rental_days,
            added_at: Utc::now(),
        };
        self.cart_items.insert(id, item.clone());
        item
    }

    /// Replaces a row's quantity.
    pub fn update_cart_item_quantity(&mut self, id: CartItemId, quantity: i32) -> Option<CartItem> {
        let item = self.cart_items.get_mut(&id)?;
        item.quantity = quantity;
        Some(item.clone())
    }

    /// Marks a row as a rental over the given period. The day count is the
    /// ceiling of the span, so any partial day rounds up to a full one.
    pub fn update_cart_item_rental_dates(
        &mut self,
        id: CartItemId,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Option<CartItem> {
        let item = self.cart_items.get_mut(&id)?;
        let span_ms = (end_date - start_date).num_milliseconds();
        let whole_days = span_ms / 86_400_000 + i64::from(span_ms % 86_400_000 > 0);
        let days = i32::try_from(whole_days).unwrap_or(i32::MAX);
        item.is_rental = true;
        item.rental_start_date = Some(start_date);
        item.rental_end_date = Some(end_date);
        item.rental_days = Some(days);
        Some(item.clone())
    }

    /// Removes a single row. Missing rows are ignored.
    pub fn remove_cart_item(&mut self, id: CartItemId) {
        self.cart_items.remove(&id);
    }

    /// Removes every row in a cart.
    pub fn clear_cart(&mut self, cart_id: CartId) {
        let item_ids: Vec<CartItemId> = self
            .cart_items
            .values()
            .filter(|item| item.cart_id == cart_id)
            .map(|item| item.id)
            .collect();
        for id in item_ids {
            self.cart_items.remove(&id);
        }
    }

    /// Moves a row into another cart. When the destination already holds the
    /// product the quantities merge and the source row is deleted; otherwise
    /// the row is repointed in place. Returns `None` when the row or the
    /// destination cart is missing.
    pub fn move_cart_item(&mut self, item_id: CartItemId, to_cart_id: CartId) -> Option<CartItem> {
        let (product_id, quantity) = {
            let item = self.cart_items.get(&item_id)?;
            (item.product_id, item.quantity)
        };
        if !self.carts.contains_key(&to_cart_id) {
            return None;
        }

        let collision = self
            .cart_item(to_cart_id, product_id)
            .map(|item| item.id)
            .filter(|id| *id != item_id);
        if let Some(target_id) = collision {
            self.cart_items.remove(&item_id);
            let target = self.cart_items.get_mut(&target_id)?;
            target.quantity += quantity;
            return Some(target.clone());
        }

        let item = self.cart_items.get_mut(&item_id)?;
        item.cart_id = to_cart_id;
        Some(item.clone())
    }
}
