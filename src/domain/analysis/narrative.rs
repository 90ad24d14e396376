//! Narrative Generator - composes the human-readable half of a report.

use crate::config::ScoringTunables;
use crate::domain::foundation::Urgency;

use super::context::{DecisionContext, DecisionOption};
use super::report::Ranking;
use super::templates::{self, SpreadBucket};
use super::vocabulary::meaningful_phrases;

/// Maximum confidence the engine will ever claim.
const CONFIDENCE_CEILING: f64 = 0.95;

/// Confidence floor, reached when every option ties.
const CONFIDENCE_BASE: f64 = 0.5;

/// Pros quoted verbatim in the reasoning, at most.
const MAX_QUOTED_PROS: usize = 3;

/// Cons quoted verbatim in the reasoning, at most.
const MAX_QUOTED_CONS: usize = 2;

/// Stateless generator for reasoning, summary, factors, and bias warnings.
pub struct NarrativeGenerator;

impl NarrativeGenerator {
    /// Confidence derived from the final score spread:
    /// `min(0.95, 0.5 + spread/100 * 0.4)`.
    pub fn confidence_score(final_spread: i32) -> f64 {
        (CONFIDENCE_BASE + (final_spread as f64 / 100.0) * 0.4).min(CONFIDENCE_CEILING)
    }

    /// One to three sentences naming the winner, its score, and a
    /// risk-keyed closing clause.
    pub fn summary(top: &Ranking, top_option: &DecisionOption) -> String {
        format!(
            "\"{}\" comes out on top with a score of {}. {}",
            top_option.text,
            top.score,
            templates::summary_risk_clause(top.risk_level)
        )
    }

    /// Multi-part reasoning text for the whole ranking.
    pub fn reasoning(
        ctx: &DecisionContext,
        top: &Ranking,
        top_option: &DecisionOption,
        final_spread: i32,
        tunables: &ScoringTunables,
    ) -> String {
        let mut parts = Vec::new();

        parts.push(format!(
            "I weighed your {} options for \"{}\".",
            ctx.options.len(),
            ctx.title
        ));
        parts.push(templates::urgency_clause(ctx.urgency).to_string());
        parts.push(Self::standout_section(top, top_option));
        parts.push(templates::reasoning_risk_remark(top.risk_level).to_string());
        parts.push(
            templates::comparison_clause(SpreadBucket::of(final_spread, tunables.spread_threshold))
                .to_string(),
        );

        parts.join(" ")
    }

    /// The "why this stands out" section: quotes meaningful pros/cons,
    /// or falls back to a score-based statement when nothing survives
    /// the boilerplate filter.
    fn standout_section(top: &Ranking, top_option: &DecisionOption) -> String {
        let pros = meaningful_phrases(&top_option.pros);
        let cons = meaningful_phrases(&top_option.cons);

        if pros.is_empty() && cons.is_empty() {
            return if top.score.value() >= 70 {
                "It stands out because it lines up with what your decision is actually about."
                    .to_string()
            } else {
                "None of the options separates itself strongly, but this one edges ahead on the factors that matter."
                    .to_string()
            };
        }

        let mut section = String::from("What stands out:");
        if !pros.is_empty() {
            let quoted: Vec<String> = pros
                .iter()
                .take(MAX_QUOTED_PROS)
                .map(|p| format!("\"{}\"", p))
                .collect();
            section.push_str(&format!(" in its favor, {}.", quoted.join(", ")));
        }
        if !cons.is_empty() {
            let quoted: Vec<String> = cons
                .iter()
                .take(MAX_QUOTED_CONS)
                .map(|c| format!("\"{}\"", c))
                .collect();
            section.push_str(&format!(" Worth watching: {}.", quoted.join(", ")));
        }
        section
    }

    /// Fixed-order contextual observations about the decision.
    pub fn key_factors(ctx: &DecisionContext) -> Vec<String> {
        let mut factors = Vec::new();

        factors.push(format!("This is a {} decision", ctx.category));
        factors.push(templates::urgency_factor(ctx.urgency).to_string());

        let count = ctx.options.len();
        if count > 4 {
            factors.push(format!(
                "{} options is a lot to weigh at once; the ranking narrows it down",
                count
            ));
        } else if count == 2 {
            factors.push("A clean either/or choice keeps the comparison simple".to_string());
        } else {
            factors.push(format!("{} options give you a workable shortlist", count));
        }

        let total_pros = ctx.total_pros();
        let total_cons = ctx.total_cons();
        if total_pros > total_cons * 2 {
            factors.push(
                "You listed far more pros than cons, which suggests you already lean positive"
                    .to_string(),
            );
        } else if total_cons > total_pros {
            factors.push(
                "Cons outnumber pros here, so this choice is more about limiting downside"
                    .to_string(),
            );
        }

        if let Some(history) = &ctx.user_history {
            if history.total_decisions > 0 {
                factors.push(format!(
                    "You've logged {} decisions with a {:.0}% success rate",
                    history.total_decisions,
                    history.success_rate * 100.0
                ));
            }
        }

        factors
    }

    /// Bias warnings, evaluated independently in a fixed order.
    /// Never returns an empty list.
    pub fn potential_biases(ctx: &DecisionContext) -> Vec<String> {
        let mut biases = Vec::new();

        if let Some(first) = ctx.options.first() {
            if first.balance() > 2 {
                biases.push(
                    "Your first option carries far more pros than cons; make sure later options got the same effort"
                        .to_string(),
                );
            }
        }

        if ctx.options.len() > 5 {
            biases.push(
                "With this many choices it's easy to compare superficially; consider cutting the list first"
                    .to_string(),
            );
        }

        if ctx.urgency == Urgency::Critical {
            biases.push(
                "Critical time pressure pushes people toward the familiar option; double-check that's what you want"
                    .to_string(),
            );
        }

        let option_count = ctx.options.len().max(1) as f64;
        let avg_pros = ctx.total_pros() as f64 / option_count;
        let avg_cons = ctx.total_cons() as f64 / option_count;
        if avg_pros > avg_cons * 2.0 {
            biases.push(
                "The framing leans heavily positive overall; the downsides may be underexplored"
                    .to_string(),
            );
        } else if avg_cons > avg_pros * 2.0 {
            biases.push(
                "The framing leans heavily negative overall; you may be underselling every option"
                    .to_string(),
            );
        }

        if biases.is_empty() {
            biases.push(
                "No obvious bias pattern detected; your options look evenly considered".to_string(),
            );
        }

        biases
    }
}
