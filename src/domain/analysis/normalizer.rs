//! Score Normalizer - manufactures separation for near-ties and assigns ranks.

use std::cmp::Reverse;

use crate::config::ScoringTunables;
use crate::domain::foundation::{Score, SCORE_CEILING};

use super::option_scorer::ScoredOption;
use super::report::Ranking;

/// Turns raw scored options into a dense, tie-free ranking.
pub struct ScoreNormalizer;

impl ScoreNormalizer {
    /// Normalizes scores and assigns ranks 1..=N.
    ///
    /// When the raw spread is below the differentiation threshold (and there
    /// are at least 2 options), the raw values are discarded and replaced by
    /// `clamp(reassign_base - reassign_step * position, reassign_floor, 95)`
    /// over the descending order, which preserves relative order while
    /// forcing visible separation. Ties always break by original input
    /// position (stable sorts throughout).
    ///
    /// # Edge Cases
    /// - Single option: spread step skipped, rank is trivially 1
    /// - Empty input: returns empty Vec
    pub fn normalize(scored: Vec<ScoredOption>, tunables: &ScoringTunables) -> Vec<Ranking> {
        if scored.is_empty() {
            return Vec::new();
        }

        let max = scored.iter().map(|s| s.raw_score).max().unwrap_or(0);
        let min = scored.iter().map(|s| s.raw_score).min().unwrap_or(0);
        let spread = max - min;

        // Stable: equal raw scores keep their input order.
        let mut ordered = scored;
        ordered.sort_by_key(|s| Reverse(s.raw_score));

        let reassign = spread < tunables.spread_threshold && ordered.len() >= 2;

        ordered
            .into_iter()
            .enumerate()
            .map(|(position, s)| {
                let score = if reassign {
                    (tunables.reassign_base - tunables.reassign_step * position as i32)
                        .clamp(tunables.reassign_floor, SCORE_CEILING as i32)
                } else {
                    s.raw_score
                };

                Ranking {
                    option_id: s.option_id,
                    rank: position as u32 + 1,
                    score: Score::clamped(score),
                    predicted_outcome: s.predicted_outcome,
                    risk_level: s.risk_level,
                    time_horizon: s.time_horizon,
                }
            })
            .collect()
    }
}
