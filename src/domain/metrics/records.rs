//! Historical records supplied by the decision store.
//!
//! These mirror the collaborator's persisted rows; the engine only reads
//! them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DecisionId, OptionId, OutcomeId, Urgency, UserId};

/// How an outcome was judged by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeType {
    Positive,
    Neutral,
    Negative,
}

/// One logged decision, as fetched from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub id: DecisionId,
    pub user_id: UserId,
    pub title: String,
    /// Missing category counts as "general" for grouping.
    #[serde(default)]
    pub category: Option<String>,
    pub urgency: Urgency,
    #[serde(default)]
    pub options: Vec<OptionId>,
    #[serde(default)]
    pub chosen_option: Option<OptionId>,
    /// Self-reported confidence in [0, 1], if recorded.
    #[serde(default)]
    pub confidence_score: Option<f64>,
    /// Seconds between opening and deciding, if recorded.
    #[serde(default)]
    pub time_to_decide: Option<u32>,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
}

impl DecisionRecord {
    /// Category used for grouping, defaulting to "general".
    pub fn category_or_default(&self) -> &str {
        self.category.as_deref().unwrap_or("general")
    }
}

/// The recorded outcome of one decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeRecord {
    pub id: OutcomeId,
    pub decision_id: DecisionId,
    pub user_id: UserId,
    pub outcome_type: OutcomeType,
    /// 1-10 self-rating, if recorded.
    #[serde(default)]
    pub outcome_score: Option<u8>,
}

impl OutcomeRecord {
    /// An outcome counts as successful if it was judged positive or rated 7+.
    pub fn is_successful(&self) -> bool {
        self.outcome_type == OutcomeType::Positive || self.outcome_score.unwrap_or(0) >= 7
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(outcome_type: OutcomeType, score: Option<u8>) -> OutcomeRecord {
        OutcomeRecord {
            id: OutcomeId::new(),
            decision_id: DecisionId::new(),
            user_id: UserId::new("u1").unwrap(),
            outcome_type,
            outcome_score: score,
        }
    }

    #[test]
    fn positive_outcomes_are_successful() {
        assert!(outcome(OutcomeType::Positive, None).is_successful());
        assert!(outcome(OutcomeType::Positive, Some(2)).is_successful());
    }

    #[test]
    fn high_scores_are_successful_regardless_of_type() {
        assert!(outcome(OutcomeType::Neutral, Some(7)).is_successful());
        assert!(outcome(OutcomeType::Negative, Some(9)).is_successful());
    }

    #[test]
    fn low_scores_without_positive_type_are_not_successful() {
        assert!(!outcome(OutcomeType::Neutral, Some(6)).is_successful());
        assert!(!outcome(OutcomeType::Negative, None).is_successful());
    }

    #[test]
    fn missing_category_defaults_to_general() {
        let record = DecisionRecord {
            id: DecisionId::new(),
            user_id: UserId::new("u1").unwrap(),
            title: "t".to_string(),
            category: None,
            urgency: Urgency::Low,
            options: vec![],
            chosen_option: None,
            confidence_score: None,
            time_to_decide: None,
            is_completed: false,
            created_at: Utc::now(),
        };
        assert_eq!(record.category_or_default(), "general");
    }

    #[test]
    fn outcome_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&OutcomeType::Positive).unwrap(),
            "\"positive\""
        );
    }
}
