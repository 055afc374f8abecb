//! Orders and order items.

use std::fmt;
use std::str::FromStr;

use campusmart_foundation::{OrderId, OrderItemId, ParseError, ProductId, UserId};
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Order lifecycle states, in order.
///
/// `Completed` is the authoritative terminal state: reaching it finalizes
/// stock depletion on every product the order touched. Earlier states do not
/// alter product stock by themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OrderStatus {
    /// Just placed.
    Pending,
    /// Accepted by the seller.
    Processing,
    /// Handed to a carrier.
    Shipped,
    /// Arrived at the buyer.
    Delivered,
    /// Finalized; stock depletion applied.
    Completed,
    /// Abandoned.
    Cancelled,
}

impl OrderStatus {
    /// Wire string used by the route layer.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(ParseError::new("order status", other)),
        }
    }
}

/// How the buyer receives the goods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DeliveryMethod {
    /// Campus pickup at a meetup location.
    Pickup,
    /// Local delivery.
    Delivery,
    /// Carrier shipping.
    Shipping,
}

impl DeliveryMethod {
    /// Wire string used by the route layer.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pickup => "pickup",
            Self::Delivery => "delivery",
            Self::Shipping => "shipping",
        }
    }
}

impl fmt::Display for DeliveryMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliveryMethod {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pickup" => Ok(Self::Pickup),
            "delivery" => Ok(Self::Delivery),
            "shipping" => Ok(Self::Shipping),
            other => Err(ParseError::new("delivery method", other)),
        }
    }
}

/// A placed order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Order {
    /// Surrogate key.
    pub id: OrderId,
    /// The buyer.
    pub user_id: UserId,
    /// Order total, captured at placement.
    pub total: f64,
    /// Lifecycle state.
    pub status: OrderStatus,
    /// Shipping address string.
    pub shipping_address: String,
    /// Payment method label.
    pub payment_method: String,
    /// How the goods are handed over.
    pub delivery_method: DeliveryMethod,
    /// Campus meetup location, for pickups.
    pub meetup_location: Option<String>,
    /// Carrier tracking number.
    pub tracking_number: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Contact phone for this order.
    pub contact_phone: Option<String>,
    /// Placement time.
    pub created_at: DateTime<Utc>,
    /// Last status change.
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted at order placement.
#[derive(Debug, Clone)]
pub struct NewOrder {
    /// The buyer.
    pub user_id: UserId,
    /// Order total.
    pub total: f64,
    /// Initial status; defaults to [`OrderStatus::Pending`].
    pub status: Option<OrderStatus>,
    /// Shipping address.
    pub shipping_address: String,
    /// Payment method.
    pub payment_method: String,
    /// Delivery method; defaults to [`DeliveryMethod::Shipping`].
    pub delivery_method: Option<DeliveryMethod>,
    /// Meetup location.
    pub meetup_location: Option<String>,
    /// Tracking number.
    pub tracking_number: Option<String>,
    /// Notes.
    pub notes: Option<String>,
    /// Contact phone.
    pub contact_phone: Option<String>,
}

impl NewOrder {
    /// Creates an order input with the optional fields unset.
    #[must_use]
    pub fn new(
        user_id: UserId,
        total: f64,
        shipping_address: impl Into<String>,
        payment_method: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            total,
            status: None,
            shipping_address: shipping_address.into(),
            payment_method: payment_method.into(),
            delivery_method: None,
            meetup_location: None,
            tracking_number: None,
            notes: None,
            contact_phone: None,
        }
    }
}

/// A line item inside an order.
///
/// `seller_id` and `price` are denormalized at placement so seller-scoped
/// queries and receipts survive later product edits or deletion.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrderItem {
    /// Surrogate key.
    pub id: OrderItemId,
    /// Owning order.
    pub order_id: OrderId,
    /// Referenced product. May dangle if the product was since deleted.
    pub product_id: ProductId,
    /// Seller of the product at order time.
    pub seller_id: UserId,
    /// Point-in-time price.
    pub price: f64,
    /// Quantity ordered.
    pub quantity: i32,
    /// Whether this line is a rental.
    pub is_rental: bool,
    /// Rental period start.
    pub rental_start_date: Option<DateTime<Utc>>,
    /// Rental period end.
    pub rental_end_date: Option<DateTime<Utc>>,
    /// Rental span in days.
    pub rental_days: Option<i32>,
}

/// Line-item fields supplied at order placement; the order id is attached by
/// the store.
#[derive(Debug, Clone)]
pub struct NewOrderItem {
    /// Referenced product.
    pub product_id: ProductId,
    /// Seller of the product at order time.
    pub seller_id: UserId,
    /// Point-in-time price.
    pub price: f64,
    /// Quantity ordered.
    pub quantity: i32,
    /// Rental flag; defaults to false.
    pub is_rental: Option<bool>,
    /// Rental period start.
    pub rental_start_date: Option<DateTime<Utc>>,
    /// Rental period end.
    pub rental_end_date: Option<DateTime<Utc>>,
    /// Rental span in days.
    pub rental_days: Option<i32>,
}

impl NewOrderItem {
    /// Creates a purchase line item; rental fields start unset.
    #[must_use]
    pub fn new(product_id: ProductId, seller_id: UserId, price: f64, quantity: i32) -> Self {
        Self {
            product_id,
            seller_id,
            price,
            quantity,
            is_rental: None,
            rental_start_date: None,
            rental_end_date: None,
            rental_days: None,
        }
    }
}

/// An order line joined with its product snapshot.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrderItemWithProduct {
    /// The line item.
    pub item: OrderItem,
    /// The referenced product; `None` if deleted since the order was placed.
    pub product: Option<Product>,
}

/// An order joined with its (possibly seller-filtered) items.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrderWithItems {
    /// The order. `total` and `status` always describe the whole order, even
    /// when `items` has been filtered to one seller's lines.
    pub order: Order,
    /// The resolved items.
    pub items: Vec<OrderItemWithProduct>,
}
