//! Message entity.

use super::{MessageId, Tag, UserId};
use serde::{Deserialize, Serialize};

/// Path prefix under which messages are addressable.
const MESSAGES_PATH: &str = "/v1/messages";

/// A message posted by a user under a tag.
///
/// `author_id` refers to a [`User`](super::User) but the store does not
/// check that the user exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    body: String,
    author_id: UserId,
    tag: Tag,
}

impl Message {
    /// Creates a message record.
    #[must_use]
    pub fn new(id: MessageId, body: impl Into<String>, author_id: UserId, tag: Tag) -> Self {
        Self {
            id,
            body: body.into(),
            author_id,
            tag,
        }
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> &MessageId {
        &self.id
    }

    /// Returns the message body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the identifier of the authoring user.
    #[must_use]
    pub const fn author_id(&self) -> &UserId {
        &self.author_id
    }

    /// Returns the tag attached to the message.
    #[must_use]
    pub const fn tag(&self) -> &Tag {
        &self.tag
    }

    /// Returns the resource path at which this message can be read back.
    ///
    /// # Examples
    ///
    /// ```
    /// use msgboard::board::domain::{Message, MessageId, Tag, UserId};
    ///
    /// let message = Message::new(MessageId::new("m1"), "hi", UserId::new("u1"), Tag::new("greet"));
    /// assert_eq!(message.location(), "/v1/messages/m1");
    /// ```
    #[must_use]
    pub fn location(&self) -> String {
        format!("{MESSAGES_PATH}/{}", self.id)
    }
}
