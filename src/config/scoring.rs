//! Scoring pipeline tunables.

use serde::Deserialize;

/// Weights and thresholds driving the option scorer and normalizer.
///
/// The defaults were tuned empirically against journal data; in particular
/// the spread threshold and the reassignment formula (`85 - 15 * position`,
/// clamped to [25, 95]) are behavioral constants, not principled values.
/// Change them only with regression coverage in place.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringTunables {
    /// Starting score for every option.
    #[serde(default = "default_base_score")]
    pub base_score: i32,

    /// Penalty for avoidance options inside a work-related decision.
    #[serde(default = "default_work_avoidance_penalty")]
    pub work_avoidance_penalty: i32,

    /// Bonus for productive options inside a work-related decision.
    #[serde(default = "default_work_productive_bonus")]
    pub work_productive_bonus: i32,

    /// Bonus per title word (longer than 3 chars) found in the option text.
    #[serde(default = "default_title_overlap_bonus")]
    pub title_overlap_bonus: i32,

    /// Bonus per positive-sentiment keyword present in the option text.
    #[serde(default = "default_positive_sentiment_bonus")]
    pub positive_sentiment_bonus: i32,

    /// Penalty per negative-sentiment keyword present in the option text.
    #[serde(default = "default_negative_sentiment_penalty")]
    pub negative_sentiment_penalty: i32,

    /// Bonus per listed pro.
    #[serde(default = "default_pro_weight")]
    pub pro_weight: i32,

    /// Penalty per listed con.
    #[serde(default = "default_con_weight")]
    pub con_weight: i32,

    /// Bonus when the option text is 2 to 10 words long.
    #[serde(default = "default_specificity_bonus")]
    pub specificity_bonus: i32,

    /// First-listed preference: each option gets max(0, this - index).
    #[serde(default = "default_position_bonus_max")]
    pub position_bonus_max: i32,

    /// Below this max-min spread the normalizer manufactures separation.
    #[serde(default = "default_spread_threshold")]
    pub spread_threshold: i32,

    /// Reassigned score for the best option when the normalizer kicks in.
    #[serde(default = "default_reassign_base")]
    pub reassign_base: i32,

    /// Step subtracted per sorted position during reassignment.
    #[serde(default = "default_reassign_step")]
    pub reassign_step: i32,

    /// Lower clamp for reassigned scores (upper clamp is the score ceiling).
    #[serde(default = "default_reassign_floor")]
    pub reassign_floor: i32,
}

impl Default for ScoringTunables {
    fn default() -> Self {
        Self {
            base_score: default_base_score(),
            work_avoidance_penalty: default_work_avoidance_penalty(),
            work_productive_bonus: default_work_productive_bonus(),
            title_overlap_bonus: default_title_overlap_bonus(),
            positive_sentiment_bonus: default_positive_sentiment_bonus(),
            negative_sentiment_penalty: default_negative_sentiment_penalty(),
            pro_weight: default_pro_weight(),
            con_weight: default_con_weight(),
            specificity_bonus: default_specificity_bonus(),
            position_bonus_max: default_position_bonus_max(),
            spread_threshold: default_spread_threshold(),
            reassign_base: default_reassign_base(),
            reassign_step: default_reassign_step(),
            reassign_floor: default_reassign_floor(),
        }
    }
}

fn default_base_score() -> i32 {
    50
}

fn default_work_avoidance_penalty() -> i32 {
    25
}

fn default_work_productive_bonus() -> i32 {
    15
}

fn default_title_overlap_bonus() -> i32 {
    10
}

fn default_positive_sentiment_bonus() -> i32 {
    5
}

fn default_negative_sentiment_penalty() -> i32 {
    3
}

fn default_pro_weight() -> i32 {
    10
}

fn default_con_weight() -> i32 {
    7
}

fn default_specificity_bonus() -> i32 {
    5
}

fn default_position_bonus_max() -> i32 {
    3
}

fn default_spread_threshold() -> i32 {
    15
}

fn default_reassign_base() -> i32 {
    85
}

fn default_reassign_step() -> i32 {
    15
}

fn default_reassign_floor() -> i32 {
    25
}
