//! Unit tests for the board module.
//!
//! Tests are organised by concept: domain values, error rendering,
//! validation rules, transport encoding and service orchestration.
