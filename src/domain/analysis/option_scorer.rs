//! Option Scorer - raw heuristic scoring of each candidate option.

use crate::config::ScoringTunables;
use crate::domain::foundation::{OptionId, RiskLevel, TimeHorizon, SCORE_CEILING, SCORE_FLOOR};

use super::context::DecisionContext;
use super::templates;
use super::vocabulary::{
    contains_any, count_matches, AVOIDANCE_KEYWORDS, NEGATIVE_SENTIMENT, POSITIVE_SENTIMENT,
    PRODUCTIVE_KEYWORDS, WORK_CONTEXT_KEYWORDS,
};

/// One option's raw scoring result, before normalization assigns ranks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredOption {
    pub option_id: OptionId,
    /// Heuristic score, already clamped to the [20, 95] range.
    pub raw_score: i32,
    pub predicted_outcome: String,
    pub risk_level: RiskLevel,
    pub time_horizon: TimeHorizon,
}

/// Stateless scorer for a decision's options.
pub struct OptionScorer;

impl OptionScorer {
    /// Scores every option in the context independently.
    ///
    /// # Algorithm (per option)
    /// Start from the base score, then apply in order: work-context
    /// avoidance/productive adjustment, title-word overlap, sentiment
    /// keywords, pro/con counts, a specificity bonus for 2-10 word options,
    /// and a small first-listed preference. The result is clamped to
    /// [20, 95].
    ///
    /// # Edge Cases
    /// - Empty pros/cons/description: contribute nothing, never an error
    /// - Empty option list: returns an empty Vec (the engine rejects it
    ///   upstream)
    pub fn score_options(ctx: &DecisionContext, tunables: &ScoringTunables) -> Vec<ScoredOption> {
        let full_context = ctx.full_context();
        let is_work_decision = contains_any(&full_context, WORK_CONTEXT_KEYWORDS);

        let title_words: Vec<String> = ctx
            .title
            .to_lowercase()
            .split_whitespace()
            .filter(|w| w.chars().count() > 3)
            .map(str::to_string)
            .collect();

        ctx.options
            .iter()
            .enumerate()
            .map(|(index, option)| {
                let text = option.text.to_lowercase();
                let is_avoidance = contains_any(&text, AVOIDANCE_KEYWORDS);
                let is_productive = contains_any(&text, PRODUCTIVE_KEYWORDS);

                let mut score = tunables.base_score;

                if is_work_decision {
                    if is_avoidance {
                        score -= tunables.work_avoidance_penalty;
                    }
                    if is_productive {
                        score += tunables.work_productive_bonus;
                    }
                }

                // Overlap with the decision title, uncapped at this stage.
                score += title_words.iter().filter(|w| text.contains(w.as_str())).count() as i32
                    * tunables.title_overlap_bonus;

                score += count_matches(&text, POSITIVE_SENTIMENT) as i32
                    * tunables.positive_sentiment_bonus;
                score -= count_matches(&text, NEGATIVE_SENTIMENT) as i32
                    * tunables.negative_sentiment_penalty;

                score += option.pros.len() as i32 * tunables.pro_weight;
                score -= option.cons.len() as i32 * tunables.con_weight;

                let word_count = option.text.split_whitespace().count();
                if (2..=10).contains(&word_count) {
                    score += tunables.specificity_bonus;
                }

                score += (tunables.position_bonus_max - index as i32).max(0);

                let risk_level = if is_avoidance && is_work_decision {
                    RiskLevel::High
                } else if is_productive {
                    RiskLevel::Low
                } else {
                    RiskLevel::Medium
                };

                ScoredOption {
                    option_id: option.id.clone(),
                    raw_score: score.clamp(SCORE_FLOOR as i32, SCORE_CEILING as i32),
                    predicted_outcome: templates::predicted_outcome(&ctx.category, option),
                    risk_level,
                    time_horizon: TimeHorizon::from_urgency(ctx.urgency),
                }
            })
            .collect()
    }
}
