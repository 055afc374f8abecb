//! The store: single owner of every entity map and id counter.
//!
//! Operations are grouped into one submodule per subsystem; each contributes
//! an `impl Store` block. The store is single-threaded by design, so every
//! compound operation runs start to finish with no interleaving and the
//! cross-entity invariants hold at every method boundary.

mod carts;
mod messages;
mod orders;
mod products;
mod rentals;
mod reviews;

use campusmart_foundation::{
    CartId, CartItemId, IdGen, MessageId, OrderId, OrderItemId, ProductId, RentalId, ReviewId,
    UserId,
};
use chrono::Utc;
use im::OrdMap;

use crate::cart::{Cart, CartItem, NewCart};
use crate::message::Message;
use crate::order::{Order, OrderItem};
use crate::product::Product;
use crate::rental::Rental;
use crate::review::Review;
use crate::user::{NewUser, User, UserPatch};

/// The in-memory relational store behind the marketplace.
///
/// Entity maps are `im::OrdMap`s keyed by surrogate id, so every scan runs in
/// ascending id order and derived queries come out deterministic. Lookups
/// signal absence with `None`; no store method validates its input or returns
/// an error.
#[derive(Debug, Clone, Default)]
pub struct Store {
    users: OrdMap<UserId, User>,
    products: OrdMap<ProductId, Product>,
    carts: OrdMap<CartId, Cart>,
    cart_items: OrdMap<CartItemId, CartItem>,
    orders: OrdMap<OrderId, Order>,
    order_items: OrdMap<OrderItemId, OrderItem>,
    reviews: OrdMap<ReviewId, Review>,
    rentals: OrdMap<RentalId, Rental>,
    messages: OrdMap<MessageId, Message>,
    user_ids: IdGen<UserId>,
    product_ids: IdGen<ProductId>,
    cart_ids: IdGen<CartId>,
    cart_item_ids: IdGen<CartItemId>,
    order_ids: IdGen<OrderId>,
    order_item_ids: IdGen<OrderItemId>,
    review_ids: IdGen<ReviewId>,
    rental_ids: IdGen<RentalId>,
    message_ids: IdGen<MessageId>,
}

impl Store {
    /// Creates an empty store with every id counter at 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a user by id.
    #[must_use]
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    /// Finds a user by exact username.
    #[must_use]
    pub fn user_by_username(&self, username: &str) -> Option<&User> {
        self.users.values().find(|user| user.username == username)
    }

    /// Registers a user and provisions their default cart.
    ///
    /// Every user leaves registration owning exactly one cart, named
    /// "My Cart" and flagged as their default.
    pub fn create_user(&mut self, new: NewUser) -> User {
        let id = self.user_ids.mint();
        let user = User {
            id,
            username: new.username,
            password: new.password,
            email: new.email,
            name: new.name,
            phone: new.phone,
            campus: new.campus,
            dormitory: new.dormitory,
            profile_image: new.profile_image,
            bio: new.bio,
            created_at: Utc::now(),
        };
        self.users.insert(id, user.clone());
        tracing::debug!(user = %id, username = %user.username, "registered user");

        let mut cart = NewCart::new(id);
        cart.is_default = Some(true);
        self.create_cart(cart);

        user
    }

    /// Applies a partial profile update. Returns the updated record, or
    /// `None` when no such user exists.
    pub fn update_user(&mut self, id: UserId, patch: UserPatch) -> Option<User> {
        let user = self.users.get_mut(&id)?;
        if let Some(username) = patch.username {
            user.username = username;
        }
        if let Some(password) = patch.password {
            user.password = password;
        }
        if let Some(email) = patch.email {
            user.email = email;
        }
        if let Some(name) = patch.name {
            user.name = name;
        }
        if let Some(phone) = patch.phone {
            user.phone = phone;
        }
        if let Some(campus) = patch.campus {
            user.campus = campus;
        }
        if let Some(dormitory) = patch.dormitory {
            user.dormitory = dormitory;
        }
        if let Some(profile_image) = patch.profile_image {
            user.profile_image = profile_image;
        }
        if let Some(bio) = patch.bio {
            user.bio = bio;
        }
        Some(user.clone())
    }
}
