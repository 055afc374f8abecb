//! Messages between users, optionally about a product.

use campusmart_foundation::{MessageId, ProductId, UserId};
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::product::Product;
use crate::user::User;

/// A mailbox message.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Message {
    /// Surrogate key.
    pub id: MessageId,
    /// Sending user.
    pub sender_id: UserId,
    /// Receiving user.
    pub receiver_id: UserId,
    /// The product the message is about, if any.
    pub product_id: Option<ProductId>,
    /// Message body.
    pub content: String,
    /// Read flag; starts false.
    pub is_read: bool,
    /// Send time.
    pub created_at: DateTime<Utc>,
}

/// Fields accepted when sending a message.
#[derive(Debug, Clone)]
pub struct NewMessage {
    /// Sending user.
    pub sender_id: UserId,
    /// Receiving user.
    pub receiver_id: UserId,
    /// Product the message is about.
    pub product_id: Option<ProductId>,
    /// Message body.
    pub content: String,
}

impl NewMessage {
    /// Creates a message input not tied to a product.
    #[must_use]
    pub fn new(sender_id: UserId, receiver_id: UserId, content: impl Into<String>) -> Self {
        Self {
            sender_id,
            receiver_id,
            product_id: None,
            content: content.into(),
        }
    }
}

/// A message joined with its participants.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MessageWithUsers {
    /// The message.
    pub message: Message,
    /// The sender; `None` if the id no longer resolves.
    pub sender: Option<User>,
    /// The receiver; `None` if the id no longer resolves.
    pub receiver: Option<User>,
    /// The product, when the message references one that still exists.
    pub product: Option<Product>,
}
