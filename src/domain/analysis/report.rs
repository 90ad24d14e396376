//! Output types for the scoring pipeline.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{OptionId, RiskLevel, Score, TimeHorizon};

/// One scored, ranked option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ranking {
    pub option_id: OptionId,
    /// 1 = best. Ranks are a dense permutation of 1..=N with no ties.
    pub rank: u32,
    pub score: Score,
    pub predicted_outcome: String,
    pub risk_level: RiskLevel,
    pub time_horizon: TimeHorizon,
}

/// The full analysis produced for one decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Sorted by `rank` ascending.
    pub rankings: Vec<Ranking>,
    /// Multi-paragraph explanation of the ranking.
    pub reasoning: String,
    /// One to three sentences highlighting the top option.
    pub summary: String,
    /// In [0.5, 0.95], derived from the final score spread.
    pub confidence_score: f64,
    pub key_factors: Vec<String>,
    /// Never empty; a reassuring default is used when nothing triggers.
    pub potential_biases: Vec<String>,
    /// Text of the rank-1 option.
    pub recommended_action: String,
}

impl AnalysisReport {
    /// Returns the rank-1 entry.
    pub fn top_ranking(&self) -> Option<&Ranking> {
        self.rankings.iter().find(|r| r.rank == 1)
    }

    /// Max minus min of the final scores (0 for fewer than 2 rankings).
    pub fn score_spread(&self) -> i32 {
        let max = self.rankings.iter().map(|r| r.score.value()).max();
        let min = self.rankings.iter().map(|r| r.score.value()).min();
        match (max, min) {
            (Some(max), Some(min)) => i32::from(max) - i32::from(min),
            _ => 0,
        }
    }
}
