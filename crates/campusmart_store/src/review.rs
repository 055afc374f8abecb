//! Product reviews.

use campusmart_foundation::{ProductId, ReviewId, UserId};
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::user::User;

/// A product review. Creating one recomputes the product's aggregate
/// rating and review count.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Review {
    /// Surrogate key.
    pub id: ReviewId,
    /// Reviewed product.
    pub product_id: ProductId,
    /// Review author.
    pub user_id: UserId,
    /// Integer rating.
    pub rating: i32,
    /// Optional comment.
    pub comment: Option<String>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// Fields accepted when posting a review.
#[derive(Debug, Clone)]
pub struct NewReview {
    /// Reviewed product.
    pub product_id: ProductId,
    /// Review author.
    pub user_id: UserId,
    /// Integer rating.
    pub rating: i32,
    /// Optional comment.
    pub comment: Option<String>,
}

impl NewReview {
    /// Creates a review input without a comment.
    #[must_use]
    pub fn new(product_id: ProductId, user_id: UserId, rating: i32) -> Self {
        Self {
            product_id,
            user_id,
            rating,
            comment: None,
        }
    }
}

/// A review joined with its author.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReviewWithAuthor {
    /// The review.
    pub review: Review,
    /// The author; `None` if the id no longer resolves.
    pub author: Option<User>,
}
