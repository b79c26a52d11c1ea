//! Msgboard: in-memory backend for a tagged message board.
//!
//! Users post messages carrying a short tag; clients read messages back by
//! identifier or collect every message filed under a tag.
//!
//! # Architecture
//!
//! Msgboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure entity types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage and validation
//! - **Adapters**: Concrete implementations of ports (in-memory storage and
//!   its call-tracking decorator)
//!
//! # Modules
//!
//! - [`board`]: Users, messages, tags and the concurrent store behind them

pub mod board;
