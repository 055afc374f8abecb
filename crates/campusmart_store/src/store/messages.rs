//! Messaging between buyers and sellers.

use campusmart_foundation::{MessageId, UserId};
use chrono::Utc;

use crate::message::{Message, MessageWithUsers, NewMessage};
use crate::store::Store;

impl Store {
    /// Sends a message. It starts unread.
    pub fn send_message(&mut self, new: NewMessage) -> Message {
        let id = self.message_ids.mint();
        let message = Message {
            id,
            sender_id: new.sender_id,
            receiver_id: new.receiver_id,
            product_id: new.product_id,
            content: new.content,
            is_read: false,
            created_at: Utc::now(),
        };
        self.messages.insert(id, message.clone());
        message
    }

    fn message_details(&self, message: &Message) -> MessageWithUsers {
        MessageWithUsers {
            message: message.clone(),
            sender: self.users.get(&message.sender_id).cloned(),
            receiver: self.users.get(&message.receiver_id).cloned(),
            product: message
                .product_id
                .and_then(|product_id| self.products.get(&product_id).cloned()),
        }
    }

    /// Every message a user sent or received, in id order.
    #[must_use]
    pub fn user_messages(&self, user_id: UserId) -> Vec<MessageWithUsers> {
        self.messages
            .values()
            .filter(|message| message.sender_id == user_id || message.receiver_id == user_id)
            .map(|message| self.message_details(message))
            .collect()
    }

    /// The two-way thread between two users, oldest first.
    #[must_use]
    pub fn conversation(&self, user_a: UserId, user_b: UserId) -> Vec<MessageWithUsers> {
        let mut thread: Vec<&Message> = self
            .messages
            .values()
            .filter(|message| {
                (message.sender_id == user_a && message.receiver_id == user_b)
                    || (message.sender_id == user_b && message.receiver_id == user_a)
            })
            .collect();
        thread.sort_by_key(|message| message.created_at);
        thread
            .into_iter()
            .map(|message| self.message_details(message))
            .collect()
    }

    /// Marks a message read. Already-read messages stay read.
    pub fn mark_message_as_read(&mut self, id: MessageId) -> Option<Message> {
        let message = self.messages.get_mut(&id)?;
        message.is_read = true;
        Some(message.clone())
    }
}
