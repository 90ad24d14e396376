//! Metrics Module - weekly review over stored decisions and outcomes.
//!
//! Pure aggregation: the caller fetches the window's records through the
//! store port, `MetricsAnalyzer` folds them into a `UserMetrics` snapshot,
//! and `InsightGenerator` turns the snapshot into user-facing takeaways.

mod analyzer;
mod insights;
mod records;
mod user_metrics;

pub use analyzer::MetricsAnalyzer;
pub use insights::{Insight, InsightGenerator, InsightType};
pub use records::{DecisionRecord, OutcomeRecord, OutcomeType};
pub use user_metrics::{
    CategoryStats, TimePatterns, UserMetrics, ANALYSIS_PARALYSIS, FIRST_OPTION_BIAS,
    LAST_OPTION_BIAS, OVERCONFIDENCE_BIAS,
};
