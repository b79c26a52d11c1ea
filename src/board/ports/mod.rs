//! Port trait definitions for the board.
//!
//! Ports define the abstract interfaces that callers require from storage
//! and validation. Adapters implement them.

pub mod store;
pub mod validator;

pub use store::{MessageStore, Store, StoreResult, UserStore};
pub use validator::{Validate, ValidationConfig, ValidationResult};
