//! Derived weekly metrics for one user.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Bias counter keys, shared between the analyzer and insight templates.
pub const FIRST_OPTION_BIAS: &str = "first_option_bias";
pub const LAST_OPTION_BIAS: &str = "last_option_bias";
pub const OVERCONFIDENCE_BIAS: &str = "overconfidence_bias";
pub const ANALYSIS_PARALYSIS: &str = "analysis_paralysis";

/// Aggregate performance within one decision category.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryStats {
    pub total: u32,
    /// Decisions whose outcome counted as successful.
    pub positive: u32,
    /// Mean recorded confidence, missing values counted as 0.
    pub avg_confidence: f64,
}

impl CategoryStats {
    /// Fraction of this category's decisions with a successful outcome.
    pub fn positive_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        f64::from(self.positive) / f64::from(self.total)
    }
}

/// Decision counts over the four fixed time-of-day buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimePatterns {
    /// [06:00, 12:00)
    pub morning: u32,
    /// [12:00, 17:00)
    pub afternoon: u32,
    /// [17:00, 21:00)
    pub evening: u32,
    /// Everything else.
    pub night: u32,
}

impl TimePatterns {
    /// Adds one decision made at the given hour of day (0-23).
    pub fn record_hour(mut self, hour: u32) -> Self {
        match hour {
            6..=11 => self.morning += 1,
            12..=16 => self.afternoon += 1,
            17..=20 => self.evening += 1,
            _ => self.night += 1,
        }
        self
    }
}

/// The full metrics snapshot for one user and window.
///
/// Request-scoped: computed fresh per invocation, never persisted by the
/// engine itself.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserMetrics {
    /// Fraction of outcomes judged successful, in [0, 1].
    pub success_rate: f64,
    /// Decision-overload estimate, in [0, 10].
    pub fatigue_score: f64,
    /// Percentage of decisions marked completed, in [0, 100].
    pub productivity_score: f64,
    /// Bias name to fraction of decisions exhibiting it, each in [0, 1].
    pub bias_fractions: BTreeMap<String, f64>,
    pub category_performance: BTreeMap<String, CategoryStats>,
    pub time_patterns: TimePatterns,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hours_land_in_the_fixed_buckets() {
        let patterns = TimePatterns::default()
            .record_hour(6)
            .record_hour(11)
            .record_hour(12)
            .record_hour(16)
            .record_hour(17)
            .record_hour(20)
            .record_hour(21)
            .record_hour(3);

        assert_eq!(patterns.morning, 2);
        assert_eq!(patterns.afternoon, 2);
        assert_eq!(patterns.evening, 2);
        assert_eq!(patterns.night, 2);
    }

    #[test]
    fn positive_rate_handles_empty_category() {
        assert_eq!(CategoryStats::default().positive_rate(), 0.0);
        let stats = CategoryStats { total: 4, positive: 3, avg_confidence: 0.5 };
        assert!((stats.positive_rate() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn metrics_serialize_to_json() {
        let metrics = UserMetrics::default();
        let json = serde_json::to_string(&metrics).unwrap();
        assert!(json.contains("\"success_rate\":0.0"));
        assert!(json.contains("\"time_patterns\""));
    }
}
