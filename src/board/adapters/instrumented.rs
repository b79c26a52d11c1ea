//! Call-tracking decorator over any store.
//!
//! [`InstrumentedStore`] lets tests of the calling layer assert which store
//! operations a request touched, and force a chosen operation to fail
//! without touching the wrapped store.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::board::{
    domain::{Message, MessageId, Tag, User, UserId},
    error::StoreError,
    ports::store::{MessageStore, StoreResult, UserStore},
};

/// Store operations observable through [`InstrumentedStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOperation {
    /// [`UserStore::save_user`].
    SaveUser,
    /// [`UserStore::load_user`].
    LoadUser,
    /// [`UserStore::find_user_by_name`].
    FindUserByName,
    /// [`MessageStore::save_message`].
    SaveMessage,
    /// [`MessageStore::load_message`].
    LoadMessage,
    /// [`MessageStore::find_message_ids_by_tag`].
    FindMessageIdsByTag,
}

impl StoreOperation {
    /// Every operation, in port declaration order.
    pub const ALL: [Self; 6] = [
        Self::SaveUser,
        Self::LoadUser,
        Self::FindUserByName,
        Self::SaveMessage,
        Self::LoadMessage,
        Self::FindMessageIdsByTag,
    ];

    /// Returns the operation name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SaveUser => "save_user",
            Self::LoadUser => "load_user",
            Self::FindUserByName => "find_user_by_name",
            Self::SaveMessage => "save_message",
            Self::LoadMessage => "load_message",
            Self::FindMessageIdsByTag => "find_message_ids_by_tag",
        }
    }
}

impl fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Default)]
struct Probe {
    called: HashSet<StoreOperation>,
    failures: HashMap<StoreOperation, StoreError>,
}

/// Decorator recording store calls and optionally failing them.
///
/// Without a configured failure every call is forwarded to the wrapped
/// store and its result returned unchanged. With one, the wrapped store is
/// not called at all.
///
/// # Example
///
/// ```
/// use msgboard::board::adapters::instrumented::{InstrumentedStore, StoreOperation};
/// use msgboard::board::adapters::memory::InMemoryStore;
/// use msgboard::board::domain::UserId;
/// use msgboard::board::error::StoreError;
/// use msgboard::board::ports::store::UserStore;
///
/// let store = InstrumentedStore::new(InMemoryStore::new());
/// assert!(!store.was_called(StoreOperation::LoadUser));
///
/// assert_eq!(store.load_user(&UserId::new("u1")), Err(StoreError::NotFound));
/// assert!(store.was_called(StoreOperation::LoadUser));
///
/// store.fail_with(StoreOperation::FindUserByName, StoreError::IdentifierMissing);
/// assert_eq!(store.find_user_by_name("Alice"), Err(StoreError::IdentifierMissing));
/// ```
#[derive(Debug, Default)]
pub struct InstrumentedStore<S> {
    inner: S,
    probe: Mutex<Probe>,
}

impl<S> InstrumentedStore<S> {
    /// Wraps `inner` with no recorded calls and no configured failures.
    #[must_use]
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            probe: Mutex::new(Probe::default()),
        }
    }

    /// Returns the wrapped store.
    #[must_use]
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    /// Returns `true` if `operation` has been invoked since the last reset.
    #[must_use]
    pub fn was_called(&self, operation: StoreOperation) -> bool {
        self.probe().called.contains(&operation)
    }

    /// Makes every later call to `operation` return `error` instead of
    /// delegating.
    pub fn fail_with(&self, operation: StoreOperation, error: StoreError) {
        self.probe().failures.insert(operation, error);
    }

    /// Removes a configured failure for `operation`.
    pub fn clear_failure(&self, operation: StoreOperation) {
        self.probe().failures.remove(&operation);
    }

    /// Forgets recorded calls and configured failures.
    pub fn reset(&self) {
        let mut probe = self.probe();
        probe.called.clear();
        probe.failures.clear();
    }

    fn probe(&self) -> MutexGuard<'_, Probe> {
        self.probe.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Records the call and returns the configured failure, if any.
    fn enter(&self, operation: StoreOperation) -> StoreResult<()> {
        let mut probe = self.probe();
        probe.called.insert(operation);
        probe.failures.get(&operation).map_or(Ok(()), |err| Err(*err))
    }
}

impl<S: UserStore> UserStore for InstrumentedStore<S> {
    fn save_user(&self, user: &User) -> StoreResult<()> {
        self.enter(StoreOperation::SaveUser)?;
        self.inner.save_user(user)
    }

    fn load_user(&self, id: &UserId) -> StoreResult<User> {
        self.enter(StoreOperation::LoadUser)?;
        self.inner.load_user(id)
    }

    fn find_user_by_name(&self, name: &str) -> StoreResult<User> {
        self.enter(StoreOperation::FindUserByName)?;
        self.inner.find_user_by_name(name)
    }
}

impl<S: MessageStore> MessageStore for InstrumentedStore<S> {
    fn save_message(&self, message: &Message) -> StoreResult<()> {
        self.enter(StoreOperation::SaveMessage)?;
        self.inner.save_message(message)
    }

    fn load_message(&self, id: &MessageId) -> StoreResult<Message> {
        self.enter(StoreOperation::LoadMessage)?;
        self.inner.load_message(id)
    }

    fn find_message_ids_by_tag(&self, tag: &Tag) -> StoreResult<Vec<MessageId>> {
        self.enter(StoreOperation::FindMessageIdsByTag)?;
        self.inner.find_message_ids_by_tag(tag)
    }
}
