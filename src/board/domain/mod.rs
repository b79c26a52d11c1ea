//! Domain model for the message board.
//!
//! Users and messages are plain records keyed by caller-assigned string
//! identifiers. Tags carry their own length rule; everything else about
//! payload validity lives in [`crate::board::validation`].

mod error;
mod ids;
mod message;
mod tag;
mod user;

pub use error::{ParseMessageIdError, TagError};
pub use ids::{MessageId, UserId};
pub use message::Message;
pub use tag::{DEFAULT_TAG_MAX_LENGTH, DEFAULT_TAG_MIN_LENGTH, Tag, TagLimits};
pub use user::User;
