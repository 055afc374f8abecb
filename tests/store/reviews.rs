//! Integration tests for reviews and the derived product rating.

use campusmart_store::{NewReview, Store};

use crate::common::{list, register};

// =============================================================================
// Rating recomputation
// =============================================================================

#[test]
fn rating_is_the_exact_mean_after_each_review() {
    let mut store = Store::new();
    let seller = register(&mut store, "seller");
    let lamp = list(&mut store, seller, "Lamp", 15.0, "Home & Kitchen");

    let ratings = [5, 3, 4, 1, 2];
    let mut sum = 0;
    for (n, rating) in ratings.into_iter().enumerate() {
        let reviewer = register(&mut store, &format!("reviewer{n}"));
        store.create_review(NewReview::new(lamp, reviewer, rating));
        sum += rating;

        let product = store.product(lamp).unwrap();
        let count = i32::try_from(n + 1).unwrap();
        assert_eq!(product.review_count, count);
        assert!((product.rating - f64::from(sum) / f64::from(count)).abs() < 1e-9);
    }
}

#[test]
fn seeded_rating_is_replaced_by_the_first_review() {
    let mut store = Store::new();
    let seller = register(&mut store, "seller");
    let mut new = campusmart_store::NewProduct::new(seller, "Lamp", "desc", 15.0, "Home & Kitchen");
    new.rating = Some(4.5);
    new.review_count = Some(24);
    let lamp = store.create_product(new).id;

    store.create_review(NewReview::new(lamp, seller, 2));

    // The aggregate reflects actual reviews only.
    let product = store.product(lamp).unwrap();
    assert_eq!(product.rating, 2.0);
    assert_eq!(product.review_count, 1);
}

// =============================================================================
// Queries
// =============================================================================

#[test]
fn product_reviews_carry_their_authors() {
    let mut store = Store::new();
    let seller = register(&mut store, "seller");
    let alice = register(&mut store, "alice");
    let lamp = list(&mut store, seller, "Lamp", 15.0, "Home & Kitchen");

    let mut new = NewReview::new(lamp, alice, 4);
    new.comment = Some("does the job".to_owned());
    store.create_review(new);

    let reviews = store.product_reviews(lamp);
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].author.as_ref().unwrap().username, "alice");
    assert_eq!(reviews[0].review.comment.as_deref(), Some("does the job"));
}

#[test]
fn user_reviews_span_products() {
    let mut store = Store::new();
    let seller = register(&mut store, "seller");
    let alice = register(&mut store, "alice");
    let lamp = list(&mut store, seller, "Lamp", 15.0, "Home & Kitchen");
    let chair = list(&mut store, seller, "Chair", 35.0, "Home & Kitchen");

    store.create_review(NewReview::new(lamp, alice, 4));
    store.create_review(NewReview::new(chair, alice, 5));

    assert_eq!(store.user_reviews(alice).len(), 2);
    assert!(store.user_reviews(seller).is_empty());
}
