//! Score value object (20-95 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest score the engine ever assigns to an option.
pub const SCORE_FLOOR: u8 = 20;

/// Highest score the engine ever assigns to an option.
pub const SCORE_CEILING: u8 = 95;

/// A final option score, always within [20, 95].
///
/// Raw heuristic arithmetic happens in `i32`; this type is the clamped
/// result that leaves the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    /// Creates a Score by clamping an arbitrary raw value into [20, 95].
    pub fn clamped(raw: i32) -> Self {
        Self(raw.clamp(SCORE_FLOOR as i32, SCORE_CEILING as i32) as u8)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
