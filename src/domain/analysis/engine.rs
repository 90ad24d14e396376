//! Decision Engine - the score -> normalize -> narrate pipeline.

use tracing::debug;

use crate::config::ScoringTunables;
use crate::domain::foundation::ValidationError;

use super::context::DecisionContext;
use super::narrative::NarrativeGenerator;
use super::normalizer::ScoreNormalizer;
use super::option_scorer::OptionScorer;
use super::report::AnalysisReport;

/// Minimum number of options an analyzable decision needs.
pub const MIN_OPTIONS: usize = 2;

/// The full scoring pipeline, parameterized by tunables.
///
/// Pure and synchronous: one call, one report, no I/O. Independent calls
/// may run in parallel; the fixed score -> normalize -> narrate order only
/// holds within a single invocation.
#[derive(Debug, Clone, Default)]
pub struct DecisionEngine {
    tunables: ScoringTunables,
}

impl DecisionEngine {
    /// Creates an engine with the given tunables.
    pub fn new(tunables: ScoringTunables) -> Self {
        Self { tunables }
    }

    /// Analyzes a decision context into a ranked, narrated report.
    ///
    /// # Errors
    /// Returns `ValidationError::NotEnoughOptions` for fewer than 2 options.
    pub fn analyze(&self, ctx: &DecisionContext) -> Result<AnalysisReport, ValidationError> {
        if ctx.options.len() < MIN_OPTIONS {
            return Err(ValidationError::not_enough_options(
                MIN_OPTIONS,
                ctx.options.len(),
            ));
        }

        let scored = OptionScorer::score_options(ctx, &self.tunables);
        let rankings = ScoreNormalizer::normalize(scored, &self.tunables);

        let top = rankings
            .first()
            .expect("normalize preserves option count, which is >= 2");
        let top_option = ctx
            .options
            .iter()
            .find(|o| o.id == top.option_id)
            .expect("ranking ids come from the context's options");

        let max = rankings.iter().map(|r| r.score.value()).max().unwrap_or(0);
        let min = rankings.iter().map(|r| r.score.value()).min().unwrap_or(0);
        let final_spread = i32::from(max) - i32::from(min);

        debug!(
            options = ctx.options.len(),
            top_score = top.score.value(),
            spread = final_spread,
            "decision analyzed"
        );

        let report = AnalysisReport {
            summary: NarrativeGenerator::summary(top, top_option),
            reasoning: NarrativeGenerator::reasoning(
                ctx,
                top,
                top_option,
                final_spread,
                &self.tunables,
            ),
            confidence_score: NarrativeGenerator::confidence_score(final_spread),
            key_factors: NarrativeGenerator::key_factors(ctx),
            potential_biases: NarrativeGenerator::potential_biases(ctx),
            recommended_action: top_option.text.clone(),
            rankings,
        };

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::context::DecisionOption;
    use crate::domain::foundation::{OptionId, RiskLevel, TimeHorizon, Urgency};

    fn project_or_sleep() -> DecisionContext {
        DecisionContext {
            title: "Finish project or sleep".to_string(),
            description: String::new(),
            category: "work".to_string(),
            urgency: Urgency::High,
            options: vec![
                DecisionOption::new("1", "Finish the project"),
                DecisionOption::new("2", "Go to sleep"),
            ],
            user_history: None,
        }
    }

    #[test]
    fn rejects_fewer_than_two_options() {
        let engine = DecisionEngine::default();
        let mut ctx = project_or_sleep();
        ctx.options.truncate(1);

        let err = engine.analyze(&ctx).unwrap_err();
        assert!(matches!(err, ValidationError::NotEnoughOptions { actual: 1, .. }));
    }

    #[test]
    fn work_scenario_ranks_productive_option_first() {
        let report = DecisionEngine::default().analyze(&project_or_sleep()).unwrap();

        let top = report.top_ranking().unwrap();
        assert_eq!(top.option_id, OptionId::new("1"));
        assert_eq!(report.recommended_action, "Finish the project");
        assert_eq!(top.risk_level, RiskLevel::Low);

        let second = report.rankings.iter().find(|r| r.rank == 2).unwrap();
        assert_eq!(second.option_id, OptionId::new("2"));
        assert_eq!(second.risk_level, RiskLevel::High);
        assert!(top.score > second.score);

        assert!(report
            .rankings
            .iter()
            .all(|r| r.time_horizon == TimeHorizon::ShortTerm));
    }

    #[test]
    fn identical_options_still_get_separated_ranks_and_scores() {
        let ctx = DecisionContext {
            title: "xy".to_string(),
            description: String::new(),
            category: "general".to_string(),
            urgency: Urgency::Medium,
            options: vec![
                DecisionOption::new("1", "zzz qqq"),
                DecisionOption::new("2", "zzz qqq"),
            ],
            user_history: None,
        };
        let report = DecisionEngine::default().analyze(&ctx).unwrap();

        // Raw scores differ only by the position bonus (spread 1 < 15),
        // so the normalizer must manufacture separation.
        assert!(report.score_spread() >= 15);
        let mut ranks: Vec<u32> = report.rankings.iter().map(|r| r.rank).collect();
        ranks.sort_unstable();
        assert_eq!(ranks, vec![1, 2]);
    }

    #[test]
    fn recommended_action_matches_rank_one_text() {
        let report = DecisionEngine::default().analyze(&project_or_sleep()).unwrap();
        let top = report.top_ranking().unwrap();
        let ctx = project_or_sleep();
        let top_option = ctx.options.iter().find(|o| o.id == top.option_id).unwrap();
        assert_eq!(report.recommended_action, top_option.text);
    }

    #[test]
    fn analysis_is_deterministic() {
        let engine = DecisionEngine::default();
        let ctx = project_or_sleep();
        let first = engine.analyze(&ctx).unwrap();
        let second = engine.analyze(&ctx).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn confidence_stays_in_contract_bounds() {
        let report = DecisionEngine::default().analyze(&project_or_sleep()).unwrap();
        assert!(report.confidence_score >= 0.5);
        assert!(report.confidence_score <= 0.95);
    }

    #[test]
    fn biases_are_never_empty() {
        let report = DecisionEngine::default().analyze(&project_or_sleep()).unwrap();
        assert!(!report.potential_biases.is_empty());
    }
}
