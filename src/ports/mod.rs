//! Ports - traits at the engine's seams.
//!
//! The engine computes; collaborators fetch and persist. These traits are
//! the only way the outside world is reached.

mod decision_store;
mod insight_sink;
mod random_source;

pub use decision_store::{DecisionStore, ReviewWindow, StoreError};
pub use insight_sink::InsightSink;
pub use random_source::{FixedSource, RandomSource};
