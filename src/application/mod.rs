//! Application layer - handlers coordinating domain logic and ports.

pub mod handlers;

pub use handlers::{
    AnalyzeDecisionHandler, ReviewError, WeeklyReviewHandler, WeeklyReviewResult,
};
