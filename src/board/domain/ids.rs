//! Identifier newtypes for users and messages.
//!
//! Identifiers are opaque strings assigned by the caller before an entity is
//! saved. The store never generates them; [`UserId::generate`] and
//! [`MessageId::generate`] exist for the service layer that does.

use super::ParseMessageIdError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of a registered user.
///
/// # Examples
///
/// ```
/// use msgboard::board::domain::UserId;
///
/// let id = UserId::new("u1");
/// assert_eq!(id.as_str(), "u1");
/// assert!(!id.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Wraps an existing identifier string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Creates a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns `true` when no identifier has been assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a posted message.
///
/// # Examples
///
/// ```
/// use msgboard::board::domain::MessageId;
///
/// let id = MessageId::from_path_segment("m-1_a").expect("valid segment");
/// assert_eq!(id.as_str(), "m-1_a");
/// assert!(MessageId::from_path_segment("m 1").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(String);

impl MessageId {
    /// Wraps an existing identifier string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Creates a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Parses the identifier from a `/v1/messages/{id}` path segment.
    ///
    /// Only ASCII alphanumerics, `-` and `_` are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ParseMessageIdError`] when the segment is empty or contains
    /// any other character.
    pub fn from_path_segment(segment: &str) -> Result<Self, ParseMessageIdError> {
        let is_valid = !segment.is_empty()
            && segment
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        if !is_valid {
            return Err(ParseMessageIdError(segment.to_owned()));
        }

        Ok(Self(segment.to_owned()))
    }

    /// Returns `true` when no identifier has been assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for MessageId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
