//! Error types for board domain values.

use thiserror::Error;

/// Reasons a tag fails its length rule.
///
/// Rendered text is the bare reason (`empty value`, `too short`,
/// `too long`) so it can be embedded in a wrapping
/// [`ValidationError`](crate::board::error::ValidationError).
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TagError {
    /// The tag is the empty string.
    #[error("empty value")]
    Empty,

    /// The tag is shorter than the configured minimum.
    #[error("too short")]
    TooShort {
        /// Character length of the rejected tag.
        length: usize,
        /// Minimum accepted length.
        min: usize,
    },

    /// The tag is longer than the configured maximum.
    #[error("too long")]
    TooLong {
        /// Character length of the rejected tag.
        length: usize,
        /// Maximum accepted length.
        max: usize,
    },

    /// Tag limits were configured with a minimum above the maximum.
    #[error("tag length bounds are inverted: min {min} > max {max}")]
    InvertedLimits {
        /// Configured minimum.
        min: usize,
        /// Configured maximum.
        max: usize,
    },
}

/// Error returned when a URL path segment is not a well-formed message ID.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid message id path segment: {0:?}")]
pub struct ParseMessageIdError(pub String);
