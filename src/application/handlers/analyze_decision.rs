//! AnalyzeDecision - runs the scoring pipeline over one decision.

use tracing::info;

use crate::domain::analysis::{
    AnalysisReport, DecisionContext, DecisionEngine, MicroDecider, MicroSuggestion,
};
use crate::domain::foundation::ValidationError;
use crate::ports::RandomSource;

/// Handler for on-demand decision analysis.
///
/// Thin orchestration over the pure engine: validation and the heuristics
/// live in the domain, this layer adds tracing.
pub struct AnalyzeDecisionHandler {
    engine: DecisionEngine,
}

impl AnalyzeDecisionHandler {
    pub fn new(engine: DecisionEngine) -> Self {
        Self { engine }
    }

    /// Scores, ranks, and narrates the context's options.
    pub fn handle(&self, context: &DecisionContext) -> Result<AnalysisReport, ValidationError> {
        let report = self.engine.analyze(context)?;
        info!(
            title = %context.title,
            options = context.options.len(),
            confidence = report.confidence_score,
            "decision analyzed"
        );
        Ok(report)
    }

    /// Random quick pick for trivial decisions the full pipeline would
    /// overthink. Returns `None` when there are no options.
    pub fn quick_pick(
        &self,
        context: &DecisionContext,
        random: &mut dyn RandomSource,
    ) -> Option<MicroSuggestion> {
        MicroDecider::suggest(&context.options, random)
    }
}

impl Default for AnalyzeDecisionHandler {
    fn default() -> Self {
        Self::new(DecisionEngine::default())
    }
}
