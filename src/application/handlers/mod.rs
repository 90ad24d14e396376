//! Handlers orchestrating the domain through the ports.

mod analyze_decision;
mod weekly_review;

pub use analyze_decision::AnalyzeDecisionHandler;
pub use weekly_review::{ReviewError, WeeklyReviewHandler, WeeklyReviewResult};
