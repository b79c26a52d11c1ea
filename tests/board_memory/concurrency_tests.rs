//! Parallel access tests for the in-memory store.

use std::collections::HashSet;
use std::thread;

use super::helpers::{message, store};
use msgboard::board::{
    adapters::memory::InMemoryStore,
    domain::{MessageId, Tag, User, UserId},
    ports::store::{MessageStore, UserStore},
};
use rstest::rstest;

const WRITERS: usize = 64;

#[rstest]
fn parallel_saves_under_one_new_tag_lose_no_index_entries(store: InMemoryStore) {
    thread::scope(|scope| {
        for n in 0..WRITERS {
            let store = &store;
            scope.spawn(move || {
                store
                    .save_message(&message(&format!("m{n}"), "u1", "shared"))
                    .expect("save should succeed");
            });
        }
    });

    let ids: HashSet<MessageId> = store
        .find_message_ids_by_tag(&Tag::new("shared"))
        .expect("tag is indexed")
        .into_iter()
        .collect();

    assert_eq!(ids.len(), WRITERS);
    assert_eq!(store.message_count(), WRITERS);
    assert_eq!(store.tag_count(), 1);
}

#[rstest]
fn cloned_handles_share_state_across_threads(store: InMemoryStore) {
    let handles: Vec<_> = (0..8)
        .map(|n| {
            let store = store.clone();
            thread::spawn(move || {
                store
                    .save_user(&User::new(UserId::new(format!("u{n}")), format!("user-{n}")))
                    .expect("save should succeed");
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("writer thread should not panic");
    }

    assert_eq!(store.user_count(), 8);
    for n in 0..8 {
        assert!(store.find_user_by_name(&format!("user-{n}")).is_ok());
    }
}

#[rstest]
fn indexed_ids_are_always_loadable_during_writes(store: InMemoryStore) {
    thread::scope(|scope| {
        let writer_store = &store;
        scope.spawn(move || {
            for n in 0..WRITERS {
                writer_store
                    .save_message(&message(&format!("m{n}"), "u1", "live"))
                    .expect("save should succeed");
            }
        });

        let reader_store = &store;
        scope.spawn(move || {
            for _ in 0..WRITERS {
                let Ok(ids) = reader_store.find_message_ids_by_tag(&Tag::new("live")) else {
                    continue;
                };
                for id in ids {
                    assert!(
                        reader_store.load_message(&id).is_ok(),
                        "indexed message {id} must be loadable"
                    );
                }
            }
        });
    });

    assert_eq!(
        store
            .find_message_ids_by_tag(&Tag::new("live"))
            .expect("tag is indexed")
            .len(),
        WRITERS
    );
}
