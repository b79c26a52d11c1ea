//! Validator port and its configuration.

use crate::board::{domain::TagLimits, error::ValidationError};
use serde::{Deserialize, Serialize};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Default minimum length of a user display name.
pub const DEFAULT_USER_NAME_MIN_LENGTH: usize = 2;

/// Content rules for a value arriving at an ingestion boundary.
///
/// Implementations report the first failing rule; a failure inside an
/// embedded value is wrapped with context rather than replaced.
pub trait Validate {
    /// Validates `self` against `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] describing the failed rule.
    fn validate(&self, config: &ValidationConfig) -> ValidationResult<()>;
}

/// Configuration for validation rules.
///
/// # Examples
///
/// ```
/// use msgboard::board::ports::validator::ValidationConfig;
///
/// let config = ValidationConfig::default();
/// assert_eq!(config.tag.min_length(), 2);
/// assert_eq!(config.tag.max_length(), 128);
///
/// let parsed: ValidationConfig = serde_json::from_str(
///     r#"{"tag": {"min_length": 3, "max_length": 16}, "user_name_min_length": 4}"#,
/// )
/// .expect("valid config");
/// assert_eq!(parsed.tag.max_length(), 16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Length bounds for message tags.
    pub tag: TagLimits,
    /// Minimum length of a user display name.
    pub user_name_min_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            tag: TagLimits::default(),
            user_name_min_length: DEFAULT_USER_NAME_MIN_LENGTH,
        }
    }
}

impl ValidationConfig {
    /// Creates a strict configuration with tighter tag bounds.
    ///
    /// Useful where tags are shown in narrow UI elements.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            tag: TagLimits::new(3, 32).unwrap_or_default(),
            user_name_min_length: 3,
        }
    }
}
