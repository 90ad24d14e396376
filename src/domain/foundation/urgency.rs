//! Urgency level attached to a decision.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How urgent the caller considers a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
    Critical,
}

impl Urgency {
    /// High and Critical decisions are treated as time-pressured: they
    /// shorten the predicted time horizon and trigger a bias warning.
    pub fn is_time_pressured(&self) -> bool {
        matches!(self, Urgency::High | Urgency::Critical)
    }

    /// Returns the display label for this urgency.
    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
            Urgency::Critical => "critical",
        }
    }
}

impl Default for Urgency {
    fn default() -> Self {
        Urgency::Medium
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
