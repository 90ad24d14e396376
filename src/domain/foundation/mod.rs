//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the DailyWhy engine domain.

mod errors;
mod ids;
mod risk_level;
mod score;
mod time_horizon;
mod urgency;

pub use errors::ValidationError;
pub use ids::{DecisionId, OptionId, OutcomeId, UserId};
pub use risk_level::RiskLevel;
pub use score::{Score, SCORE_CEILING, SCORE_FLOOR};
pub use time_horizon::TimeHorizon;
pub use urgency::Urgency;
