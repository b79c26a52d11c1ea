//! Individual validation rule implementations.
//!
//! Each rule stops at the first failure. A failing embedded tag is wrapped
//! under an `invalid Tag` reason so the tag's own reason is kept.

use crate::board::{
    domain::Tag,
    error::ValidationError,
    ports::validator::{ValidationConfig, ValidationResult},
    transport::{NewMessageRequest, NewUserRequest},
};

/// Validates a tag against the configured length bounds.
///
/// # Errors
///
/// Returns a [`ValidationError`] whose single reason is `empty value`,
/// `too short` or `too long`.
///
/// # Examples
///
/// ```
/// use msgboard::board::domain::Tag;
/// use msgboard::board::ports::validator::ValidationConfig;
/// use msgboard::board::validation::rules::validate_tag;
///
/// let config = ValidationConfig::default();
/// let err = validate_tag(&Tag::new("a"), &config).expect_err("tag is too short");
/// assert_eq!(err.to_string(), "validation failed: too short");
/// ```
pub fn validate_tag(tag: &Tag, config: &ValidationConfig) -> ValidationResult<()> {
    tag.check(&config.tag).map_err(ValidationError::from)
}

/// Validates a user registration request.
///
/// # Errors
///
/// Returns `Name missing` for an empty name and `Name too short` for a
/// name below the configured minimum length.
pub fn validate_new_user(request: &NewUserRequest, config: &ValidationConfig) -> ValidationResult<()> {
    if request.name.is_empty() {
        return Err(ValidationError::new("Name missing"));
    }
    if request.name.chars().count() < config.user_name_min_length {
        return Err(ValidationError::new("Name too short"));
    }
    Ok(())
}

/// Validates a message posting request.
///
/// # Errors
///
/// Returns `missing Body`, `missing Author`, or `invalid Tag` followed by
/// the tag's own reason, checked in that order.
pub fn validate_new_message(
    request: &NewMessageRequest,
    config: &ValidationConfig,
) -> ValidationResult<()> {
    if request.body.is_empty() {
        return Err(ValidationError::new("missing Body"));
    }
    if request.author.is_empty() {
        return Err(ValidationError::new("missing Author"));
    }
    validate_tag(&request.tag, config)
        .map_err(|err| ValidationError::new("invalid Tag").merge(err))
}
