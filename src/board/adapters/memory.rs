//! In-memory implementation of the storage ports.
//!
//! Users, messages and the tag index each sit behind their own [`RwLock`],
//! so traffic on one collection never waits on another. No method holds
//! two of these locks at once.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::board::{
    domain::{Message, MessageId, Tag, User, UserId},
    error::StoreError,
    ports::store::{MessageStore, StoreResult, UserStore},
};

/// In-memory implementation of [`UserStore`] and [`MessageStore`].
///
/// Clones share the same underlying collections.
///
/// # Example
///
/// ```
/// use msgboard::board::adapters::memory::InMemoryStore;
/// use msgboard::board::domain::{User, UserId};
/// use msgboard::board::ports::store::UserStore;
///
/// let store = InMemoryStore::new();
/// let user = User::new(UserId::new("u1"), "Alice");
/// store.save_user(&user).expect("user has an id");
/// assert_eq!(store.load_user(user.id()), Ok(user));
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    users: Arc<RwLock<HashMap<UserId, User>>>,
    messages: Arc<RwLock<HashMap<MessageId, Message>>>,
    tags: Arc<RwLock<HashMap<Tag, HashSet<MessageId>>>>,
}

// Every critical section is a single map read or insert, so a panic in
// another holder cannot leave a map half-written. Poisoned guards are
// therefore taken over instead of surfaced.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored users.
    #[must_use]
    pub fn user_count(&self) -> usize {
        read(&self.users).len()
    }

    /// Returns the number of stored messages.
    #[must_use]
    pub fn message_count(&self) -> usize {
        read(&self.messages).len()
    }

    /// Returns the number of distinct tags in the index.
    #[must_use]
    pub fn tag_count(&self) -> usize {
        read(&self.tags).len()
    }

    /// Returns `true` if no users, messages or tags are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.user_count() == 0 && self.message_count() == 0 && self.tag_count() == 0
    }

    fn index_message(&self, tag: &Tag, id: &MessageId) {
        let mut tags = write(&self.tags);
        let inserted = tags.entry(tag.clone()).or_default().insert(id.clone());
        debug!(%tag, message_id = %id, inserted, "message indexed under tag");
    }
}

impl UserStore for InMemoryStore {
    fn save_user(&self, user: &User) -> StoreResult<()> {
        if user.id().is_empty() {
            return Err(StoreError::IdentifierMissing);
        }

        let replaced = write(&self.users)
            .insert(user.id().clone(), user.clone())
            .is_some();
        debug!(user_id = %user.id(), replaced, "user saved");
        Ok(())
    }

    fn load_user(&self, id: &UserId) -> StoreResult<User> {
        read(&self.users).get(id).cloned().ok_or_else(|| {
            debug!(user_id = %id, "user not found");
            StoreError::NotFound
        })
    }

    // Linear scan: names are not indexed.
    fn find_user_by_name(&self, name: &str) -> StoreResult<User> {
        read(&self.users)
            .values()
            .find(|user| user.name() == name)
            .cloned()
            .ok_or(StoreError::NotFound)
    }
}

impl MessageStore for InMemoryStore {
    fn save_message(&self, message: &Message) -> StoreResult<()> {
        if message.id().is_empty() {
            return Err(StoreError::IdentifierMissing);
        }

        // The message must be loadable before its index entry appears.
        let replaced = write(&self.messages)
            .insert(message.id().clone(), message.clone())
            .is_some();
        debug!(message_id = %message.id(), replaced, "message saved");

        self.index_message(message.tag(), message.id());
        Ok(())
    }

    fn load_message(&self, id: &MessageId) -> StoreResult<Message> {
        read(&self.messages).get(id).cloned().ok_or_else(|| {
            debug!(message_id = %id, "message not found");
            StoreError::NotFound
        })
    }

    fn find_message_ids_by_tag(&self, tag: &Tag) -> StoreResult<Vec<MessageId>> {
        read(&self.tags)
            .get(tag)
            .map(|ids| ids.iter().cloned().collect())
            .ok_or(StoreError::NotFound)
    }
}
