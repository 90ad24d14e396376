//! Micro-decision fallback - a quick pick when no scoring signal exists.
//!
//! Used for throwaway decisions ("which snack?") where running the full
//! pipeline is overkill and no option carries any classifiable signal. The
//! randomness is injected through the `RandomSource` port.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::OptionId;
use crate::ports::RandomSource;

use super::context::DecisionOption;

/// Fixed pool of reasoning lines for a random pick.
const MICRO_REASONS: &[&str] = &[
    "Sometimes the fastest decision is the best one. Go with this and don't look back.",
    "For a choice this small, any pick beats more deliberating.",
    "Your options are effectively interchangeable here, so this one is yours now.",
    "Flip-a-coin territory: this landed face up.",
    "Decision fatigue is the real enemy today. This one's settled.",
];

/// A randomly suggested option with a light-hearted justification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MicroSuggestion {
    pub option_id: OptionId,
    pub text: String,
    pub reasoning: String,
}

/// Picks one option uniformly at random.
pub struct MicroDecider;

impl MicroDecider {
    /// Suggests a random option, or `None` for an empty list.
    ///
    /// Draws two independent picks from the source: one for the option,
    /// one for the reasoning line.
    pub fn suggest(
        options: &[DecisionOption],
        random: &mut dyn RandomSource,
    ) -> Option<MicroSuggestion> {
        if options.is_empty() {
            return None;
        }

        let choice = &options[random.pick(options.len())];
        let reason = MICRO_REASONS[random.pick(MICRO_REASONS.len())];

        Some(MicroSuggestion {
            option_id: choice.id.clone(),
            text: choice.text.clone(),
            reasoning: reason.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::FixedSource;

    fn options() -> Vec<DecisionOption> {
        vec![
            DecisionOption::new("1", "Pizza"),
            DecisionOption::new("2", "Sushi"),
            DecisionOption::new("3", "Tacos"),
        ]
    }

    #[test]
    fn suggestion_is_deterministic_under_a_stubbed_source() {
        let mut source = FixedSource::new(vec![1, 0]);
        let suggestion = MicroDecider::suggest(&options(), &mut source).unwrap();
        assert_eq!(suggestion.option_id, OptionId::new("2"));
        assert_eq!(suggestion.text, "Sushi");
        assert_eq!(suggestion.reasoning, MICRO_REASONS[0]);
    }

    #[test]
    fn empty_options_yield_no_suggestion() {
        let mut source = FixedSource::new(vec![0]);
        assert!(MicroDecider::suggest(&[], &mut source).is_none());
    }

    #[test]
    fn every_pick_maps_to_a_real_option() {
        for i in 0..10 {
            let mut source = FixedSource::new(vec![i, i]);
            let suggestion = MicroDecider::suggest(&options(), &mut source).unwrap();
            assert!(options().iter().any(|o| o.id == suggestion.option_id));
        }
    }
}
