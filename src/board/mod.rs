//! Users, messages and the tag index for the message board.
//!
//! # Architecture
//!
//! - **Domain**: Entity types ([`domain::User`], [`domain::Message`], [`domain::Tag`])
//! - **Ports**: Storage contracts ([`ports::store::UserStore`], [`ports::store::MessageStore`])
//!   and the validation seam ([`ports::validator::Validate`])
//! - **Adapters**: [`adapters::memory::InMemoryStore`] and the test decorator
//!   [`adapters::instrumented::InstrumentedStore`]
//! - **Validation**: Field rules for tags and inbound payloads
//! - **Services**: [`services::MessageBoardService`], the caller used by the
//!   HTTP dispatch layer
//!
//! # Example
//!
//! ```
//! use msgboard::board::adapters::memory::InMemoryStore;
//! use msgboard::board::domain::{Message, MessageId, Tag, User, UserId};
//! use msgboard::board::ports::store::{MessageStore, UserStore};
//!
//! let store = InMemoryStore::new();
//! store
//!     .save_user(&User::new(UserId::new("u1"), "Alice"))
//!     .expect("user has an id");
//! store
//!     .save_message(&Message::new(
//!         MessageId::new("m1"),
//!         "hi",
//!         UserId::new("u1"),
//!         Tag::new("greet"),
//!     ))
//!     .expect("message has an id");
//!
//! let ids = store
//!     .find_message_ids_by_tag(&Tag::new("greet"))
//!     .expect("tag is indexed");
//! assert_eq!(ids, vec![MessageId::new("m1")]);
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod transport;
pub mod validation;

#[cfg(test)]
mod tests;
