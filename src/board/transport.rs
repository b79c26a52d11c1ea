//! Transport-level payloads exchanged with HTTP clients.
//!
//! Inbound requests carry user-chosen names rather than identifiers; the
//! service layer resolves them. Field names match the public JSON API.

use super::domain::{Message, MessageId, Tag, User};
use serde::{Deserialize, Serialize};

/// Body of a user registration request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUserRequest {
    /// Display name to register.
    pub name: String,
}

impl NewUserRequest {
    /// Creates a registration request.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Body of a message posting request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMessageRequest {
    /// Message text.
    pub body: String,
    /// Display name of the authoring user.
    pub author: String,
    /// Tag to file the message under.
    pub tag: Tag,
}

impl NewMessageRequest {
    /// Creates a posting request.
    #[must_use]
    pub fn new(body: impl Into<String>, author: impl Into<String>, tag: Tag) -> Self {
        Self {
            body: body.into(),
            author: author.into(),
            tag,
        }
    }
}

/// A message as returned to clients, with the author's display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageView {
    /// Message identifier.
    pub id: MessageId,
    /// Message text.
    pub body: String,
    /// Display name of the author.
    pub author: String,
    /// Tag the message is filed under.
    pub tag: Tag,
}

impl MessageView {
    /// Builds the outbound view of `message` written by `author`.
    #[must_use]
    pub fn new(message: &Message, author: &User) -> Self {
        Self {
            id: message.id().clone(),
            body: message.body().to_owned(),
            author: author.name().to_owned(),
            tag: message.tag().clone(),
        }
    }
}
