//! Tag label type and its length rule.

use super::TagError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default minimum tag length in characters.
pub const DEFAULT_TAG_MIN_LENGTH: usize = 2;

/// Default maximum tag length in characters.
pub const DEFAULT_TAG_MAX_LENGTH: usize = 128;

/// Inclusive character-length bounds for a valid tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTagLimits")]
pub struct TagLimits {
    min_length: usize,
    max_length: usize,
}

#[derive(Deserialize)]
struct RawTagLimits {
    min_length: usize,
    max_length: usize,
}

impl TryFrom<RawTagLimits> for TagLimits {
    type Error = TagError;

    fn try_from(raw: RawTagLimits) -> Result<Self, Self::Error> {
        Self::new(raw.min_length, raw.max_length)
    }
}

impl TagLimits {
    /// Creates tag limits.
    ///
    /// # Errors
    ///
    /// Returns [`TagError::InvertedLimits`] when `min_length` exceeds
    /// `max_length`.
    pub const fn new(min_length: usize, max_length: usize) -> Result<Self, TagError> {
        if min_length > max_length {
            return Err(TagError::InvertedLimits {
                min: min_length,
                max: max_length,
            });
        }
        Ok(Self {
            min_length,
            max_length,
        })
    }

    /// Returns the minimum accepted length.
    #[must_use]
    pub const fn min_length(&self) -> usize {
        self.min_length
    }

    /// Returns the maximum accepted length.
    #[must_use]
    pub const fn max_length(&self) -> usize {
        self.max_length
    }
}

impl Default for TagLimits {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_TAG_MIN_LENGTH,
            max_length: DEFAULT_TAG_MAX_LENGTH,
        }
    }
}

/// A short label filing a message under a topic.
///
/// Tags are not validated on construction so that the store can index
/// whatever the caller hands it; call [`Tag::check`] at ingestion
/// boundaries.
///
/// # Examples
///
/// ```
/// use msgboard::board::domain::{Tag, TagError, TagLimits};
///
/// let limits = TagLimits::default();
/// assert!(Tag::new("tagA").check(&limits).is_ok());
/// assert_eq!(Tag::new("").check(&limits), Err(TagError::Empty));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    /// Wraps a tag label.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Checks the tag against the length limits.
    ///
    /// Emptiness is reported before shortness, so `""` yields
    /// [`TagError::Empty`] even though it is also below the minimum.
    ///
    /// # Errors
    ///
    /// Returns [`TagError::Empty`], [`TagError::TooShort`] or
    /// [`TagError::TooLong`], in that order of precedence.
    pub fn check(&self, limits: &TagLimits) -> Result<(), TagError> {
        if self.0.is_empty() {
            return Err(TagError::Empty);
        }

        let length = self.0.chars().count();
        if length < limits.min_length() {
            return Err(TagError::TooShort {
                length,
                min: limits.min_length(),
            });
        }
        if length > limits.max_length() {
            return Err(TagError::TooLong {
                length,
                max: limits.max_length(),
            });
        }
        Ok(())
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
