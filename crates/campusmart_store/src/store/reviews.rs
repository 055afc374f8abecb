//! Review posting and the derived product rating.

use campusmart_foundation::{ProductId, UserId};
use chrono::Utc;

use crate::review::{NewReview, Review, ReviewWithAuthor};
use crate::store::Store;

impl Store {
    /// Posts a review, then recomputes the product's aggregate rating as the
    /// plain mean over all of its reviews. The recomputation is a full pass,
    /// never an incremental adjustment, so the aggregate can't drift.
    pub fn create_review(&mut self, new: NewReview) -> Review {
        let id = self.review_ids.mint();
        let review = Review {
            id,
            product_id: new.product_id,
            user_id: new.user_id,
            rating: new.rating,
            comment: new.comment,
            created_at: Utc::now(),
        };
        self.reviews.insert(id, review.clone());

        let ratings: Vec<i32> = self
            .reviews
            .values()
            .filter(|r| r.product_id == new.product_id)
            .map(|r| r.rating)
            .collect();
        if let Some(product) = self.products.get_mut(&new.product_id) {
            let count = i32::try_from(ratings.len()).unwrap_or(i32::MAX);
            let total: f64 = ratings.iter().copied().map(f64::from).sum();
            product.rating = total / f64::from(count);
            product.review_count = count;
            tracing::debug!(
                product = %new.product_id,
                rating = product.rating,
                reviews = count,
                "recomputed product rating"
            );
        }

        review
    }

    /// A product's reviews joined with their authors.
    #[must_use]
    pub fn product_reviews(&self, product_id: ProductId) -> Vec<ReviewWithAuthor> {
        self.reviews
            .values()
            .filter(|review| review.product_id == product_id)
            .map(|review| ReviewWithAuthor {
                review: review.clone(),
                author: self.users.get(&review.user_id).cloned(),
            })
            .collect()
    }

    /// Reviews written by a user.
    #[must_use]
    pub fn user_reviews(&self, user_id: UserId) -> Vec<Review> {
        self.reviews
            .values()
            .filter(|review| review.user_id == user_id)
            .cloned()
            .collect()
    }
}
