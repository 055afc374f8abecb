//! Rental transactions.

use std::fmt;
use std::str::FromStr;

use campusmart_foundation::{ParseError, ProductId, RentalId, UserId};
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::product::Product;
use crate::user::User;

/// Rental lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RentalStatus {
    /// Requested, not yet started.
    Pending,
    /// Item handed over.
    Active,
    /// Item returned; product rentability restored.
    Completed,
    /// Called off.
    Cancelled,
}

impl RentalStatus {
    /// Wire string used by the route layer.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for RentalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RentalStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(ParseError::new("rental status", other)),
        }
    }
}

/// A rental transaction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rental {
    /// Surrogate key.
    pub id: RentalId,
    /// Rented product.
    pub product_id: ProductId,
    /// The renter.
    pub renter_id: UserId,
    /// Rental period start.
    pub start_date: DateTime<Utc>,
    /// Rental period end.
    pub end_date: DateTime<Utc>,
    /// Total rental price.
    pub total_price: f64,
    /// Lifecycle state.
    pub status: RentalStatus,
    /// Actual return time; set once, on first completion.
    pub return_date: Option<DateTime<Utc>>,
    /// Security deposit, if any.
    pub deposit_amount: Option<f64>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// Fields accepted when opening a rental.
#[derive(Debug, Clone)]
pub struct NewRental {
    /// Rented product.
    pub product_id: ProductId,
    /// The renter.
    pub renter_id: UserId,
    /// Rental period start.
    pub start_date: DateTime<Utc>,
    /// Rental period end.
    pub end_date: DateTime<Utc>,
    /// Total rental price.
    pub total_price: f64,
    /// Initial status; defaults to [`RentalStatus::Pending`].
    pub status: Option<RentalStatus>,
    /// Security deposit.
    pub deposit_amount: Option<f64>,
    /// Notes.
    pub notes: Option<String>,
}

impl NewRental {
    /// Creates a rental request with the optional fields unset.
    #[must_use]
    pub fn new(
        product_id: ProductId,
        renter_id: UserId,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        total_price: f64,
    ) -> Self {
        Self {
            product_id,
            renter_id,
            start_date,
            end_date,
            total_price,
            status: None,
            deposit_amount: None,
            notes: None,
        }
    }
}

/// A rental joined with its product and renter.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RentalWithDetails {
    /// The rental.
    pub rental: Rental,
    /// The rented product; `None` if it no longer resolves.
    pub product: Option<Product>,
    /// The renter; `None` if the id no longer resolves.
    pub renter: Option<User>,
}
