//! Surrogate-key identifiers and the monotonic allocators that mint them.
//!
//! Every entity type owns its own id space. Ids are process-local
//! auto-incrementing integers starting at 1, never reused and never mutated
//! after assignment.

use std::fmt;
use std::marker::PhantomData;

/// Raw integer behind every surrogate key.
pub type RawId = i64;

/// Implemented by every id newtype so [`IdGen`] can mint values generically.
pub trait SurrogateId: Copy + Eq + Ord + fmt::Debug {
    /// Wraps a raw counter value.
    fn from_raw(raw: RawId) -> Self;

    /// Returns the raw integer key.
    fn raw(self) -> RawId;
}

macro_rules! surrogate_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(transparent)
        )]
        pub struct $name(RawId);

        impl $name {
            /// Creates an id from a raw integer key.
            #[must_use]
            pub const fn new(raw: RawId) -> Self {
                Self(raw)
            }

            /// Returns the raw integer key.
            #[must_use]
            pub const fn get(self) -> RawId {
                self.0
            }
        }

        impl SurrogateId for $name {
            fn from_raw(raw: RawId) -> Self {
                Self(raw)
            }

            fn raw(self) -> RawId {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

surrogate_id!(
    /// Identifies a registered user.
    UserId
);
surrogate_id!(
    /// Identifies a product listing.
    ProductId
);
surrogate_id!(
    /// Identifies a shopping cart.
    CartId
);
surrogate_id!(
    /// Identifies a row inside a cart.
    CartItemId
);
surrogate_id!(
    /// Identifies a placed order.
    OrderId
);
surrogate_id!(
    /// Identifies a line item inside an order.
    OrderItemId
);
surrogate_id!(
    /// Identifies a product review.
    ReviewId
);
surrogate_id!(
    /// Identifies a rental transaction.
    RentalId
);
surrogate_id!(
    /// Identifies a message between users.
    MessageId
);

/// Monotonic id allocator for a single entity type.
///
/// Counters start at 1 and only ever increase; a minted id is never handed
/// out again, even after the entity it named is deleted.
#[derive(Debug, Clone)]
pub struct IdGen<T> {
    next: RawId,
    _marker: PhantomData<T>,
}

impl<T: SurrogateId> IdGen<T> {
    /// Creates an allocator whose first minted id is 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next: 1,
            _marker: PhantomData,
        }
    }

    /// Mints the next id.
    pub fn mint(&mut self) -> T {
        let raw = self.next;
        self.next += 1;
        T::from_raw(raw)
    }

    /// Returns the raw value the next call to [`mint`](Self::mint) will use.
    #[must_use]
    pub fn peek(&self) -> RawId {
        self.next
    }
}

impl<T: SurrogateId> Default for IdGen<T> {
    fn default() -> Self {
        Self::new()
    }
}
