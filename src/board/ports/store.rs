//! Storage port for users, messages and the tag index.
//!
//! Operations are synchronous. Implementations are shared between request
//! handler threads, so every method takes `&self`.

use crate::board::{
    domain::{Message, MessageId, Tag, User, UserId},
    error::StoreError,
};

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence of user records.
///
/// # Implementation Notes
///
/// Implementations must ensure:
/// - Saving replaces any record with the same ID
/// - A rejected save performs no mutation
/// - Loads return snapshots that later writes do not alter
pub trait UserStore: Send + Sync {
    /// Inserts or replaces a user keyed by its ID.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IdentifierMissing`] if the user ID is empty.
    fn save_user(&self, user: &User) -> StoreResult<()>;

    /// Loads a user by ID.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no user has this ID.
    fn load_user(&self, id: &UserId) -> StoreResult<User>;

    /// Finds a user by exact display name.
    ///
    /// When several users share a name, which one is returned is
    /// unspecified.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no user has this name.
    fn find_user_by_name(&self, name: &str) -> StoreResult<User>;
}

/// Persistence of messages and the tag-to-message index.
///
/// # Implementation Notes
///
/// Implementations must ensure:
/// - Saving a message also files its ID under its tag
/// - Index entries are never removed, even when a message is re-saved
///   under a different tag
/// - No index entry becomes visible before the message it names can be
///   loaded
pub trait MessageStore: Send + Sync {
    /// Inserts or replaces a message and indexes it under its tag.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IdentifierMissing`] if the message ID is empty.
    fn save_message(&self, message: &Message) -> StoreResult<()>;

    /// Loads a message by ID.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no message has this ID.
    fn load_message(&self, id: &MessageId) -> StoreResult<Message>;

    /// Returns the IDs of all messages ever filed under `tag`, unordered.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no message was ever saved with
    /// this tag.
    fn find_message_ids_by_tag(&self, tag: &Tag) -> StoreResult<Vec<MessageId>>;
}

/// Combined user and message storage.
pub trait Store: UserStore + MessageStore {}

impl<T: UserStore + MessageStore> Store for T {}
