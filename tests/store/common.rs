//! Shared fixtures for the store integration tests.

use campusmart_foundation::{ProductId, UserId};
use campusmart_store::{NewProduct, NewUser, Store};

/// Registers a user with boilerplate credentials.
pub fn register(store: &mut Store, username: &str) -> UserId {
    store
        .create_user(NewUser {
            username: username.to_owned(),
            password: "hash".to_owned(),
            email: format!("{username}@campus.edu"),
            name: username.to_owned(),
            ..NewUser::default()
        })
        .id
}

/// Creates a plain purchase listing.
pub fn list(store: &mut Store, seller: UserId, name: &str, price: f64, category: &str) -> ProductId {
    store
        .create_product(NewProduct::new(
            seller,
            name,
            format!("{name}, lightly used"),
            price,
            category,
        ))
        .id
}

/// Creates a listing that the seller also offers for rent.
pub fn list_rentable(store: &mut Store, seller: UserId, name: &str, price: f64) -> ProductId {
    let mut new = NewProduct::new(seller, name, format!("{name}, rentable"), price, "Electronics");
    new.available_for_rent = Some(true);
    new.rental_price = Some(price / 20.0);
    new.rental_min_days = Some(1);
    new.rental_max_days = Some(30);
    store.create_product(new).id
}
