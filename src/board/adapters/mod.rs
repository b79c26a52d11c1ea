//! Storage adapters for the board.
//!
//! # Available Adapters
//!
//! - [`memory::InMemoryStore`]: Thread-safe process-lifetime storage with a
//!   tag index
//! - [`instrumented::InstrumentedStore`]: Decorator recording which store
//!   operations were called and optionally failing them, for tests of the
//!   calling layer

pub mod instrumented;
pub mod memory;
