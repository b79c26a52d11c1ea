//! Validation rules for tags and inbound payloads.
//!
//! Rules are pure functions in [`rules`]; the [`Validate`] impls here wire
//! them to the types they check.
//!
//! [`Validate`]: crate::board::ports::validator::Validate

pub mod rules;

use crate::board::{
    domain::Tag,
    ports::validator::{Validate, ValidationConfig, ValidationResult},
    transport::{NewMessageRequest, NewUserRequest},
};

impl Validate for Tag {
    fn validate(&self, config: &ValidationConfig) -> ValidationResult<()> {
        rules::validate_tag(self, config)
    }
}

impl Validate for NewUserRequest {
    fn validate(&self, config: &ValidationConfig) -> ValidationResult<()> {
        rules::validate_new_user(self, config)
    }
}

impl Validate for NewMessageRequest {
    fn validate(&self, config: &ValidationConfig) -> ValidationResult<()> {
        rules::validate_new_message(self, config)
    }
}
