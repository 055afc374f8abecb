//! Integration tests for messaging.

use campusmart_store::{NewMessage, Store};

use crate::common::{list, register};

// =============================================================================
// Mailbox
// =============================================================================

#[test]
fn mailbox_is_the_union_of_sent_and_received() {
    let mut store = Store::new();
    let alice = register(&mut store, "alice");
    let bob = register(&mut store, "bob");
    let carol = register(&mut store, "carol");

    store.send_message(NewMessage::new(alice, bob, "hey"));
    store.send_message(NewMessage::new(carol, alice, "hi alice"));
    store.send_message(NewMessage::new(bob, carol, "unrelated"));

    let mailbox = store.user_messages(alice);
    assert_eq!(mailbox.len(), 2);
    assert!(mailbox
        .iter()
        .all(|m| m.message.sender_id == alice || m.message.receiver_id == alice));
}

#[test]
fn messages_join_both_participants() {
    let mut store = Store::new();
    let alice = register(&mut store, "alice");
    let bob = register(&mut store, "bob");

    store.send_message(NewMessage::new(alice, bob, "hey"));
    let mailbox = store.user_messages(bob);

    assert_eq!(mailbox[0].sender.as_ref().unwrap().username, "alice");
    assert_eq!(mailbox[0].receiver.as_ref().unwrap().username, "bob");
    assert!(mailbox[0].product.is_none());
}

#[test]
fn read_flag_flips_once_and_stays() {
    let mut store = Store::new();
    let alice = register(&mut store, "alice");
    let bob = register(&mut store, "bob");

    let message = store.send_message(NewMessage::new(alice, bob, "hey"));
    assert!(!message.is_read);
    assert!(store.mark_message_as_read(message.id).unwrap().is_read);
    assert!(store.mark_message_as_read(message.id).unwrap().is_read);
}

// =============================================================================
// Conversations
// =============================================================================

#[test]
fn conversation_is_ordered_and_excludes_third_parties() {
    let mut store = Store::new();
    let alice = register(&mut store, "alice");
    let bob = register(&mut store, "bob");
    let carol = register(&mut store, "carol");

    store.send_message(NewMessage::new(alice, bob, "one"));
    store.send_message(NewMessage::new(carol, bob, "noise"));
    store.send_message(NewMessage::new(bob, alice, "two"));
    store.send_message(NewMessage::new(alice, bob, "three"));

    let thread = store.conversation(alice, bob);
    let contents: Vec<&str> = thread.iter().map(|m| m.message.content.as_str()).collect();
    assert_eq!(contents, vec!["one", "two", "three"]);

    let reversed = store.conversation(bob, alice);
    assert_eq!(reversed.len(), 3);
    assert_eq!(reversed[0].message.content, "one");
}

#[test]
fn product_scoped_messages_resolve_the_listing() {
    let mut store = Store::new();
    let alice = register(&mut store, "alice");
    let bob = register(&mut store, "bob");
    let lamp = list(&mut store, bob, "Lamp", 15.0, "Home & Kitchen");

    let mut new = NewMessage::new(alice, bob, "is the lamp available?");
    new.product_id = Some(lamp);
    store.send_message(new);

    let thread = store.conversation(alice, bob);
    assert_eq!(thread[0].product.as_ref().unwrap().id, lamp);

    store.delete_product(lamp);
    let after = store.conversation(alice, bob);
    assert!(after[0].product.is_none());
}
