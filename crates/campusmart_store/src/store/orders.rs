//! Order placement, lookup, and status transitions.

use campusmart_foundation::{CartId, OrderId, ProductId, UserId};
use chrono::Utc;

use crate::order::{
    DeliveryMethod, NewOrder, NewOrderItem, Order, OrderItem, OrderItemWithProduct, OrderStatus,
    OrderWithItems,
};
use crate::store::Store;

impl Store {
    /// Places an order.
    ///
    /// Runs in a fixed sequence: the order row is inserted, then each line
    /// item is inserted and its product flipped to sold (or rented, for
    /// rental lines), and finally every cart the buyer owns is emptied.
    /// Single-threaded execution makes the whole sequence effectively
    /// atomic.
    pub fn create_order(&mut self, new: NewOrder, items: Vec<NewOrderItem>) -> Order {
        let id = self.order_ids.mint();
        let now = Utc::now();
        let order = Order {
            id,
            user_id: new.user_id,
            total: new.total,
            status: new.status.unwrap_or(OrderStatus::Pending),
            shipping_address: new.shipping_address,
            payment_method: new.payment_method,
            delivery_method: new.delivery_method.unwrap_or(DeliveryMethod::Shipping),
            meetup_location: new.meetup_location,
            tracking_number: new.tracking_number,
            notes: new.notes,
            contact_phone: new.contact_phone,
            created_at: now,
            updated_at: now,
        };
        self.orders.insert(id, order.clone());

        for new_item in items {
            let item_id = self.order_item_ids.mint();
            let is_rental = new_item.is_rental.unwrap_or(false);
            let item = OrderItem {
                id: item_id,
                order_id: id,
                product_id: new_item.product_id,
                seller_id: new_item.seller_id,
                price: new_item.price,
                quantity: new_item.quantity,
                is_rental,
                rental_start_date: new_item.rental_start_date,
                rental_end_date: new_item.rental_end_date,
                rental_days: new_item.rental_days,
            };
            self.order_items.insert(item_id, item);

            if let Some(product) = self.products.get_mut(&new_item.product_id) {
                product.is_sold = !is_rental;
                product.is_rented = is_rental;
            }
        }

        let buyer_carts: Vec<CartId> = self
            .carts
            .values()
            .filter(|cart| cart.user_id == order.user_id)
            .map(|cart| cart.id)
            .collect();
        for cart_id in buyer_carts {
            self.clear_cart(cart_id);
        }

        tracing::info!(order = %id, buyer = %order.user_id, total = order.total, "placed order");
        order
    }

    /// Looks up an order with all of its items. Lines whose product was
    /// deleted keep their snapshot fields and resolve `product` to `None`.
    #[must_use]
    pub fn order(&self, id: OrderId) -> Option<OrderWithItems> {
        let order = self.orders.get(&id)?;
        Some(OrderWithItems {
            order: order.clone(),
            items: self.order_items_for(id),
        })
    }

    fn order_items_for(&self, order_id: OrderId) -> Vec<OrderItemWithProduct> {
        self.order_items
            .values()
            .filter(|item| item.order_id == order_id)
            .map(|item| OrderItemWithProduct {
                item: item.clone(),
                product: self.products.get(&item.product_id).cloned(),
            })
            .collect()
    }

    /// A buyer's orders, each with all of its items.
    #[must_use]
    pub fn orders_by_user(&self, user_id: UserId) -> Vec<OrderWithItems> {
        self.orders
            .values()
            .filter(|order| order.user_id == user_id)
            .map(|order| OrderWithItems {
                order: order.clone(),
                items: self.order_items_for(order.id),
            })
            .collect()
    }

    /// The orders containing at least one of a seller's lines, with the
    /// items narrowed to that seller. The order's `total` and `status` still
    /// describe the whole order, not the filtered subset.
    #[must_use]
    pub fn orders_by_seller(&self, seller_id: UserId) -> Vec<OrderWithItems> {
        let mut order_ids: Vec<OrderId> = self
            .order_items
            .values()
            .filter(|item| item.seller_id == seller_id)
            .map(|item| item.order_id)
            .collect();
        order_ids.sort_unstable();
        order_ids.dedup();

        order_ids
            .into_iter()
            .filter_map(|order_id| {
                let order = self.orders.get(&order_id)?;
                let items = self
                    .order_items_for(order_id)
                    .into_iter()
                    .filter(|entry| entry.item.seller_id == seller_id)
                    .collect();
                Some(OrderWithItems {
                    order: order.clone(),
                    items,
                })
            })
            .collect()
    }

    /// Advances an order's status and refreshes `updated_at`.
    ///
    /// Completion finalizes stock on every product the order touched:
    /// purchase lines mark the product sold and out of stock, rental lines
    /// mark it rented and leave stock alone. Other transitions change the
    /// order row only.
    pub fn update_order_status(&mut self, id: OrderId, status: OrderStatus) -> Option<Order> {
        let order = self.orders.get_mut(&id)?;
        order.status = status;
        order.updated_at = Utc::now();
        let updated = order.clone();

        if status == OrderStatus::Completed {
            let lines: Vec<(ProductId, bool)> = self
                .order_items
                .values()
                .filter(|item| item.order_id == id)
                .map(|item| (item.product_id, item.is_rental))
                .collect();
            for (product_id, is_rental) in lines {
                if let Some(product) = self.products.get_mut(&product_id) {
                    if is_rental {
                        product.is_rented = true;
                    } else {
                        product.is_sold = true;
                        product.in_stock = false;
                    }
                }
            }
            tracing::info!(order = %id, "order completed");
        }

        Some(updated)
    }
}
