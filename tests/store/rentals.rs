//! Integration tests for the rental lifecycle.

use campusmart_store::{NewRental, RentalStatus, Store};
use chrono::{TimeZone, Utc};

use crate::common::{list_rentable, register};

fn week_long_request(
    product: campusmart_foundation::ProductId,
    renter: campusmart_foundation::UserId,
) -> NewRental {
    NewRental::new(
        product,
        renter,
        Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 4, 8, 0, 0, 0).unwrap(),
        105.0,
    )
}

// =============================================================================
// Opening a rental
// =============================================================================

#[test]
fn opening_a_rental_holds_the_product() {
    let mut store = Store::new();
    let seller = register(&mut store, "seller");
    let renter = register(&mut store, "renter");
    let camera = list_rentable(&mut store, seller, "DSLR", 300.0);

    let rental = store.create_rental(week_long_request(camera, renter));
    assert_eq!(rental.status, RentalStatus::Pending);
    assert_eq!(rental.return_date, None);

    let product = store.product(camera).unwrap();
    assert!(product.is_rented);
    assert!(!product.rental_available);
    // The standing offer is untouched.
    assert!(product.available_for_rent);
}

// =============================================================================
// Completion
// =============================================================================

#[test]
fn completing_a_rental_releases_the_product() {
    let mut store = Store::new();
    let seller = register(&mut store, "seller");
    let renter = register(&mut store, "renter");
    let camera = list_rentable(&mut store, seller, "DSLR", 300.0);
    let rental = store.create_rental(week_long_request(camera, renter));

    store
        .update_rental_status(rental.id, RentalStatus::Active)
        .unwrap();
    let completed = store
        .update_rental_status(rental.id, RentalStatus::Completed)
        .unwrap();

    assert!(completed.return_date.is_some());
    let product = store.product(camera).unwrap();
    assert!(!product.is_rented);
    assert!(product.rental_available);
}

#[test]
fn completing_twice_keeps_the_first_return_date() {
    let mut store = Store::new();
    let seller = register(&mut store, "seller");
    let renter = register(&mut store, "renter");
    let camera = list_rentable(&mut store, seller, "DSLR", 300.0);
    let rental = store.create_rental(week_long_request(camera, renter));

    let first = store
        .update_rental_status(rental.id, RentalStatus::Completed)
        .unwrap();
    let second = store
        .update_rental_status(rental.id, RentalStatus::Completed)
        .unwrap();

    assert_eq!(second.return_date, first.return_date);
}

#[test]
fn cancellation_does_not_release_the_product() {
    let mut store = Store::new();
    let seller = register(&mut store, "seller");
    let renter = register(&mut store, "renter");
    let camera = list_rentable(&mut store, seller, "DSLR", 300.0);
    let rental = store.create_rental(week_long_request(camera, renter));

    let cancelled = store
        .update_rental_status(rental.id, RentalStatus::Cancelled)
        .unwrap();
    assert_eq!(cancelled.status, RentalStatus::Cancelled);
    assert_eq!(cancelled.return_date, None);
    // Only completion restores rentability.
    assert!(store.product(camera).unwrap().is_rented);
}

// =============================================================================
// Queries
// =============================================================================

#[test]
fn rental_histories_join_products_and_renters() {
    let mut store = Store::new();
    let seller = register(&mut store, "seller");
    let renter = register(&mut store, "renter");
    let camera = list_rentable(&mut store, seller, "DSLR", 300.0);

    let rental = store.create_rental(week_long_request(camera, renter));
    store
        .update_rental_status(rental.id, RentalStatus::Completed)
        .unwrap();
    store.create_rental(week_long_request(camera, renter));

    let history = store.product_rentals(camera);
    assert_eq!(history.len(), 2);
    assert_eq!(store.user_rentals(renter).len(), 2);
    assert_eq!(history[0].renter.as_ref().unwrap().id, renter);
    assert_eq!(history[0].product.as_ref().unwrap().id, camera);
}

#[test]
fn rental_join_tolerates_a_deleted_product() {
    let mut store = Store::new();
    let seller = register(&mut store, "seller");
    let renter = register(&mut store, "renter");
    let camera = list_rentable(&mut store, seller, "DSLR", 300.0);
    let rental = store.create_rental(week_long_request(camera, renter));

    store.delete_product(camera);

    let details = store.rental(rental.id).unwrap();
    assert!(details.product.is_none());
    assert_eq!(details.renter.as_ref().unwrap().id, renter);
}
