//! Integration tests for carts and cart items.

use campusmart_foundation::CartId;
use campusmart_store::{CartPatch, NewCart, NewCartItem, Store};
use chrono::{TimeZone, Utc};

use crate::common::{list, register};

// =============================================================================
// Default-cart invariant
// =============================================================================

#[test]
fn new_default_cart_demotes_the_old_one() {
    let mut store = Store::new();
    let user = register(&mut store, "alice");
    let original = store.default_cart(user).unwrap().cart.id;

    let mut wishlist = NewCart::new(user);
    wishlist.name = Some("Wishlist".to_owned());
    wishlist.is_default = Some(true);
    let wishlist = store.create_cart(wishlist);

    assert_eq!(store.default_cart(user).unwrap().cart.id, wishlist.id);
    assert!(!store.cart(original).unwrap().cart.is_default);

    let defaults = store
        .carts(user)
        .into_iter()
        .filter(|c| c.cart.is_default)
        .count();
    assert_eq!(defaults, 1);
}

#[test]
fn update_cart_patch_can_switch_the_default() {
    let mut store = Store::new();
    let user = register(&mut store, "alice");
    let original = store.default_cart(user).unwrap().cart.id;
    let other = store.create_cart(NewCart::new(user)).id;

    store
        .update_cart(
            other,
            CartPatch {
                is_default: Some(true),
                ..CartPatch::default()
            },
        )
        .unwrap();

    assert_eq!(store.default_cart(user).unwrap().cart.id, other);
    assert!(!store.cart(original).unwrap().cart.is_default);
}

#[test]
fn default_flags_are_scoped_per_user() {
    let mut store = Store::new();
    let alice = register(&mut store, "alice");
    let bob = register(&mut store, "bob");

    let mut extra = NewCart::new(alice);
    extra.is_default = Some(true);
    store.create_cart(extra);

    // Bob's default cart is untouched by Alice's switch.
    assert!(store.default_cart(bob).is_some());
}

#[test]
fn set_default_cart_refuses_another_users_cart() {
    let mut store = Store::new();
    let alice = register(&mut store, "alice");
    let bob = register(&mut store, "bob");
    let bobs = store.default_cart(bob).unwrap().cart.id;

    assert!(store.set_default_cart(alice, bobs).is_none());
    assert!(store.default_cart(alice).is_some());
    assert_eq!(store.default_cart(bob).unwrap().cart.id, bobs);
}

// =============================================================================
// Cart item uniqueness
// =============================================================================

#[test]
fn adding_the_same_product_twice_sums_quantities() {
    let mut store = Store::new();
    let buyer = register(&mut store, "buyer");
    let seller = register(&mut store, "seller");
    let book = list(&mut store, seller, "Course Reader", 25.0, "Books");
    let cart = store.default_cart(buyer).unwrap().cart.id;

    store.add_to_cart(NewCartItem::new(cart, book).with_quantity(2));
    store.add_to_cart(NewCartItem::new(cart, book).with_quantity(2));

    let items = store.cart_items(cart);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].item.quantity, 4);
}

#[test]
fn the_same_product_can_sit_in_two_carts() {
    let mut store = Store::new();
    let buyer = register(&mut store, "buyer");
    let seller = register(&mut store, "seller");
    let book = list(&mut store, seller, "Course Reader", 25.0, "Books");
    let default_cart = store.default_cart(buyer).unwrap().cart.id;
    let other = store.create_cart(NewCart::new(buyer)).id;

    store.add_to_cart(NewCartItem::new(default_cart, book));
    store.add_to_cart(NewCartItem::new(other, book));

    assert_eq!(store.cart_items(default_cart).len(), 1);
    assert_eq!(store.cart_items(other).len(), 1);
}

// =============================================================================
// Moving items
// =============================================================================

#[test]
fn move_merges_into_the_destination_row() {
    let mut store = Store::new();
    let buyer = register(&mut store, "buyer");
    let seller = register(&mut store, "seller");
    let book = list(&mut store, seller, "Course Reader", 25.0, "Books");
    let cart_a = store.default_cart(buyer).unwrap().cart.id;
    let cart_b = store.create_cart(NewCart::new(buyer)).id;

    let source = store.add_to_cart(NewCartItem::new(cart_a, book).with_quantity(2));
    store.add_to_cart(NewCartItem::new(cart_b, book).with_quantity(1));

    let merged = store.move_cart_item(source.id, cart_b).unwrap();
    assert_eq!(merged.quantity, 3);
    assert_eq!(merged.cart_id, cart_b);
    assert!(store.cart_item(cart_a, book).is_none());
    assert_eq!(store.cart_items(cart_b).len(), 1);
}

#[test]
fn move_to_a_missing_cart_changes_nothing() {
    let mut store = Store::new();
    let buyer = register(&mut store, "buyer");
    let seller = register(&mut store, "seller");
    let book = list(&mut store, seller, "Course Reader", 25.0, "Books");
    let cart = store.default_cart(buyer).unwrap().cart.id;
    let item = store.add_to_cart(NewCartItem::new(cart, book));

    assert!(store.move_cart_item(item.id, CartId::new(404)).is_none());
    assert_eq!(store.cart_item_by_id(item.id).unwrap().cart_id, cart);
}

// =============================================================================
// Rental rows
// =============================================================================

#[test]
fn rental_dates_derive_a_ceiled_day_count() {
    let mut store = Store::new();
    let buyer = register(&mut store, "buyer");
    let seller = register(&mut store, "seller");
    let camera = list(&mut store, seller, "DSLR", 300.0, "Electronics");
    let cart = store.default_cart(buyer).unwrap().cart.id;
    let item = store.add_to_cart(NewCartItem::new(cart, camera));

    let start = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 5, 2, 10, 0, 0).unwrap();
    let updated = store
        .update_cart_item_rental_dates(item.id, start, end)
        .unwrap();

    assert!(updated.is_rental);
    assert_eq!(updated.rental_days, Some(2));
}

// =============================================================================
// Clearing and deleting
// =============================================================================

#[test]
fn clear_cart_leaves_other_carts_alone() {
    let mut store = Store::new();
    let buyer = register(&mut store, "buyer");
    let seller = register(&mut store, "seller");
    let book = list(&mut store, seller, "Course Reader", 25.0, "Books");
    let lamp = list(&mut store, seller, "Lamp", 15.0, "Home & Kitchen");
    let cart_a = store.default_cart(buyer).unwrap().cart.id;
    let cart_b = store.create_cart(NewCart::new(buyer)).id;
    store.add_to_cart(NewCartItem::new(cart_a, book));
    store.add_to_cart(NewCartItem::new(cart_b, lamp));

    store.clear_cart(cart_a);

    assert!(store.cart_items(cart_a).is_empty());
    assert_eq!(store.cart_items(cart_b).len(), 1);
}

#[test]
fn delete_cart_takes_its_items_with_it() {
    let mut store = Store::new();
    let buyer = register(&mut store, "buyer");
    let seller = register(&mut store, "seller");
    let book = list(&mut store, seller, "Course Reader", 25.0, "Books");
    let cart = store.create_cart(NewCart::new(buyer)).id;
    let item = store.add_to_cart(NewCartItem::new(cart, book));

    assert!(store.delete_cart(cart));
    assert!(store.cart(cart).is_none());
    assert!(store.cart_item_by_id(item.id).is_none());
}
