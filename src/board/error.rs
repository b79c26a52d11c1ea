//! Error types shared by the store and its callers.
//!
//! Uses `thiserror` for typed variants that callers match on rather than
//! inspecting message text.

use super::domain::TagError;
use std::fmt;
use thiserror::Error;

/// Marker that prefixes every rendered [`ValidationError`].
pub const VALIDATION_MARKER: &str = "validation failed";

/// Separator placed between the marker and each accumulated reason.
pub const REASON_DELIMITER: &str = ": ";

/// Sentinel failures returned by store operations.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Hash)]
pub enum StoreError {
    /// A save was attempted before the caller assigned an identifier.
    #[error("storage: element ID not set")]
    IdentifierMissing,

    /// The requested key is absent from the collection or tag index.
    #[error("storage: element not found")]
    NotFound,
}

/// A field failed a content rule.
///
/// Reasons accumulate in the order they were added. Wrapping one
/// validation error inside another keeps every reason from the inner error,
/// so the rendered text reads like `validation failed: invalid Tag: too short`.
///
/// # Examples
///
/// ```
/// use msgboard::board::domain::TagError;
/// use msgboard::board::error::ValidationError;
///
/// let error = ValidationError::new("invalid Tag").merge(TagError::Empty.into());
/// assert_eq!(error.to_string(), "validation failed: invalid Tag: empty value");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    reasons: Vec<String>,
}

impl ValidationError {
    /// Creates a validation error with a single reason.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reasons: vec![reason.into()],
        }
    }

    /// Appends a further reason.
    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reasons.push(reason.into());
        self
    }

    /// Appends every reason carried by `other`, preserving its order.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.reasons.extend(other.reasons);
        self
    }

    /// Returns the accumulated reasons.
    #[must_use]
    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(VALIDATION_MARKER)?;
        for reason in &self.reasons {
            f.write_str(REASON_DELIMITER)?;
            f.write_str(reason)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

impl From<TagError> for ValidationError {
    fn from(err: TagError) -> Self {
        Self::new(err.to_string())
    }
}
