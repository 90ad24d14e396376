//! Time horizon over which an option's outcome is expected to play out.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Urgency;

/// Whether an option's consequences are near-term or long-term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeHorizon {
    ShortTerm,
    LongTerm,
}

impl TimeHorizon {
    /// Derives the horizon from decision urgency: time-pressured decisions
    /// resolve short-term, everything else long-term.
    pub fn from_urgency(urgency: Urgency) -> Self {
        if urgency.is_time_pressured() {
            TimeHorizon::ShortTerm
        } else {
            TimeHorizon::LongTerm
        }
    }

    /// Returns the display label for this horizon.
    pub fn label(&self) -> &'static str {
        match self {
            TimeHorizon::ShortTerm => "short-term",
            TimeHorizon::LongTerm => "long-term",
        }
    }
}

impl fmt::Display for TimeHorizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
