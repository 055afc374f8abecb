//! Product listings: records, input/patch types, and the query filter.

use std::fmt;
use std::str::FromStr;

use campusmart_foundation::{ParseError, ProductId, UserId};
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::user::User;

/// A product listing.
///
/// `is_sold` and `is_rented` are mutually exclusive states driven by order
/// and rental completion; `rental_available` is false whenever `is_rented`
/// is true. `rating`/`review_count` are derived and recomputed whenever a
/// review lands.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Product {
    /// Surrogate key.
    pub id: ProductId,
    /// The user selling (or renting out) the item.
    pub seller_id: UserId,
    /// Listing title.
    pub name: String,
    /// Listing description.
    pub description: String,
    /// Asking price.
    pub price: f64,
    /// Category label, matched case-insensitively by queries.
    pub category: String,
    /// Item condition, e.g. "new", "used".
    pub condition: String,
    /// Additional image URLs.
    pub images: Vec<String>,
    /// Primary image URL.
    pub main_image: String,
    /// Campus location, if given.
    pub location: Option<String>,
    /// Keyword tags.
    pub tags: Vec<String>,
    /// Whether the seller offers this item for rent at all.
    pub available_for_rent: bool,
    /// Rental price per day.
    pub rental_price: Option<f64>,
    /// Whether the item can currently be rented. Forced false while rented.
    pub rental_available: bool,
    /// Minimum rental period in days.
    pub rental_min_days: Option<i32>,
    /// Maximum rental period in days.
    pub rental_max_days: Option<i32>,
    /// Set when a purchase order consumes the listing.
    pub is_sold: bool,
    /// Set while a rental holds the listing.
    pub is_rented: bool,
    /// Mean of all review ratings. Derived.
    pub rating: f64,
    /// Number of reviews. Derived.
    pub review_count: i32,
    /// Stock flag; cleared when a purchase order completes.
    pub in_stock: bool,
    /// Featured on the storefront.
    pub featured: bool,
    /// "New arrival" badge.
    pub is_new: bool,
    /// Discounted listing.
    pub on_sale: bool,
    /// Pre-discount price, when on sale.
    pub old_price: Option<f64>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last mutation time.
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted when a seller creates a listing.
///
/// Unset optionals are defaulted at creation so the stored record always has
/// every field present.
#[derive(Debug, Clone)]
pub struct NewProduct {
    /// The seller.
    pub seller_id: UserId,
    /// Listing title.
    pub name: String,
    /// Listing description.
    pub description: String,
    /// Asking price.
    pub price: f64,
    /// Category label.
    pub category: String,
    /// Condition; defaults to "used".
    pub condition: Option<String>,
    /// Additional image URLs.
    pub images: Vec<String>,
    /// Primary image URL.
    pub main_image: String,
    /// Campus location.
    pub location: Option<String>,
    /// Keyword tags.
    pub tags: Vec<String>,
    /// Offered for rent; defaults to false.
    pub available_for_rent: Option<bool>,
    /// Rental price per day.
    pub rental_price: Option<f64>,
    /// Minimum rental days.
    pub rental_min_days: Option<i32>,
    /// Maximum rental days.
    pub rental_max_days: Option<i32>,
    /// Initial rating; defaults to 0.
    pub rating: Option<f64>,
    /// Initial review count; defaults to 0.
    pub review_count: Option<i32>,
    /// Stock flag; defaults to true.
    pub in_stock: Option<bool>,
    /// Featured flag; defaults to false.
    pub featured: Option<bool>,
    /// "New arrival" badge; defaults to false.
    pub is_new: Option<bool>,
    /// On-sale flag; defaults to false.
    pub on_sale: Option<bool>,
    /// Pre-discount price.
    pub old_price: Option<f64>,
}

impl NewProduct {
    /// Creates a listing input with every optional field unset.
    #[must_use]
    pub fn new(
        seller_id: UserId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            seller_id,
            name: name.into(),
            description: description.into(),
            price,
            category: category.into(),
            condition: None,
            images: Vec::new(),
            main_image: String::new(),
            location: None,
            tags: Vec::new(),
            available_for_rent: None,
            rental_price: None,
            rental_min_days: None,
            rental_max_days: None,
            rating: None,
            review_count: None,
            in_stock: None,
            featured: None,
            is_new: None,
            on_sale: None,
            old_price: None,
        }
    }
}

/// Partial listing update applied by [`crate::Store::update_product`].
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    /// Replaces the title.
    pub name: Option<String>,
    /// Replaces the description.
    pub description: Option<String>,
    /// Replaces the price.
    pub price: Option<f64>,
    /// Replaces the category.
    pub category: Option<String>,
    /// Replaces the condition.
    pub condition: Option<String>,
    /// Replaces the image list.
    pub images: Option<Vec<String>>,
    /// Replaces the primary image.
    pub main_image: Option<String>,
    /// Sets or clears the location.
    pub location: Option<Option<String>>,
    /// Replaces the tags.
    pub tags: Option<Vec<String>>,
    /// Replaces the rent-offer flag.
    pub available_for_rent: Option<bool>,
    /// Sets or clears the rental price.
    pub rental_price: Option<Option<f64>>,
    /// Replaces the current rentability flag.
    pub rental_available: Option<bool>,
    /// Sets or clears the minimum rental days.
    pub rental_min_days: Option<Option<i32>>,
    /// Sets or clears the maximum rental days.
    pub rental_max_days: Option<Option<i32>>,
    /// Replaces the stock flag.
    pub in_stock: Option<bool>,
    /// Replaces the featured flag.
    pub featured: Option<bool>,
    /// Replaces the "new arrival" badge.
    pub is_new: Option<bool>,
    /// Replaces the on-sale flag.
    pub on_sale: Option<bool>,
    /// Sets or clears the pre-discount price.
    pub old_price: Option<Option<f64>>,
}

/// A product joined with its seller. Only produced when the seller resolves.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProductWithSeller {
    /// The listing.
    pub product: Product,
    /// The resolved seller.
    pub seller: User,
}

/// Sort order for catalog queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SortKey {
    /// Cheapest first.
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
    /// Best-rated first.
    RatingDesc,
    /// Most recently listed first (descending id).
    Newest,
}

impl SortKey {
    /// Wire string used by the route layer.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
            Self::RatingDesc => "rating_desc",
            Self::Newest => "newest",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price_asc" => Ok(Self::PriceAsc),
            "price_desc" => Ok(Self::PriceDesc),
            "rating_desc" => Ok(Self::RatingDesc),
            "newest" => Ok(Self::Newest),
            other => Err(ParseError::new("sort key", other)),
        }
    }
}

/// Catalog query parameters.
///
/// Applied in a fixed order: filter, then sort, then paginate. Pagination
/// only kicks in when `limit` is set.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Case-insensitive exact category match.
    pub category: Option<String>,
    /// Case-insensitive substring match over name and description.
    pub search: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Option<f64>,
    /// Inclusive upper price bound.
    pub max_price: Option<f64>,
    /// Filter on the featured flag.
    pub featured: Option<bool>,
    /// Sort order.
    pub sort: Option<SortKey>,
    /// Page size.
    pub limit: Option<usize>,
    /// Rows to skip; ignored unless `limit` is set.
    pub offset: Option<usize>,
}
