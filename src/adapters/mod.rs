//! Adapters - concrete implementations of the ports.
//!
//! The engine ships with an RNG adapter for production use and in-memory
//! store/sink adapters for tests; persistence-backed adapters live with
//! the embedding application.

pub mod memory;
pub mod random;

pub use memory::{InMemoryDecisionStore, InMemoryInsightSink};
pub use random::ThreadRngSource;
