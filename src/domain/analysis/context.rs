//! Input types for the scoring pipeline.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{OptionId, Urgency};

/// One candidate choice within a decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionOption {
    pub id: OptionId,
    /// Free-text label. The engine reads it but never rewrites it.
    pub text: String,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
}

impl DecisionOption {
    /// Creates an option with no pros or cons.
    pub fn new(id: impl Into<OptionId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            pros: Vec::new(),
            cons: Vec::new(),
        }
    }

    /// Creates an option with pros and cons.
    pub fn with_pros_cons(
        id: impl Into<OptionId>,
        text: impl Into<String>,
        pros: Vec<String>,
        cons: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            pros,
            cons,
        }
    }

    /// Difference between pro and con counts (positive means pros lead).
    pub fn balance(&self) -> i32 {
        self.pros.len() as i32 - self.cons.len() as i32
    }
}

/// A compact summary of the user's track record, supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserHistory {
    pub total_decisions: u32,
    /// Fraction in [0, 1].
    pub success_rate: f64,
    #[serde(default)]
    pub preferred_categories: Vec<String>,
}

/// The full input to one analysis run.
///
/// `category` is an open string ("work", "health", "finance", ...);
/// unrecognized values fall back to the general narrative templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionContext {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub urgency: Urgency,
    pub options: Vec<DecisionOption>,
    #[serde(default)]
    pub user_history: Option<UserHistory>,
}

impl DecisionContext {
    /// Lower-cased concatenation of title and description, the text the
    /// scorer classifies for work-context keywords.
    pub fn full_context(&self) -> String {
        format!("{} {}", self.title, self.description).to_lowercase()
    }

    /// Total pros across all options.
    pub fn total_pros(&self) -> usize {
        self.options.iter().map(|o| o.pros.len()).sum()
    }

    /// Total cons across all options.
    pub fn total_cons(&self) -> usize {
        self.options.iter().map(|o| o.cons.len()).sum()
    }
}
