//! Domain layer containing the engine's business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `analysis` - The option-scoring pipeline (score, normalize, narrate)
//! - `metrics` - The weekly metrics analyzer and insight generation

pub mod analysis;
pub mod foundation;
pub mod metrics;
