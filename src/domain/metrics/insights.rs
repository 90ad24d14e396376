//! Insight generation - natural-language takeaways from a metrics snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::foundation::UserId;

use super::user_metrics::{
    CategoryStats, UserMetrics, ANALYSIS_PARALYSIS, FIRST_OPTION_BIAS, OVERCONFIDENCE_BIAS,
};

/// Success rate at or above which the user gets a positive insight.
const SUCCESS_PRAISE_THRESHOLD: f64 = 0.7;

/// Success rate below which the user gets an alert.
const SUCCESS_ALERT_THRESHOLD: f64 = 0.5;

/// Fatigue score at or above which the user gets a high-fatigue alert.
const FATIGUE_ALERT_THRESHOLD: f64 = 7.0;

/// Bias fraction above which a bias-specific insight fires.
const BIAS_THRESHOLD: f64 = 0.4;

/// Minimum decisions in a category before it can be called a strength.
const CATEGORY_STRENGTH_MIN_SAMPLES: u32 = 3;

/// Kind of insight, for caller-side filtering and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightType {
    Positive,
    Alert,
    BiasWarning,
    CategoryStrength,
}

/// One generated insight, ready for the sink.
///
/// `priority` is a fixed integer (4-9) used purely for caller-side sorting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub user_id: UserId,
    pub insight_type: InsightType,
    pub insight_title: String,
    pub insight_text: String,
    /// Metric values backing this insight.
    pub metrics: serde_json::Value,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub period_start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub period_end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub action_items: Option<Vec<String>>,
    pub priority: u8,
}

/// Turns a metrics snapshot into a fixed-threshold list of insights.
pub struct InsightGenerator;

impl InsightGenerator {
    /// Applies every insight rule in a fixed order.
    ///
    /// Rules are independent; the output can be empty when nothing crosses
    /// a threshold.
    pub fn generate(
        user_id: &UserId,
        metrics: &UserMetrics,
        period: Option<(DateTime<Utc>, DateTime<Utc>)>,
    ) -> Vec<Insight> {
        let mut insights = Vec::new();
        let base = |insight_type, title: &str, text: String, payload, action_items, priority| {
            Insight {
                user_id: user_id.clone(),
                insight_type,
                insight_title: title.to_string(),
                insight_text: text,
                metrics: payload,
                category: None,
                period_start: period.map(|(start, _)| start),
                period_end: period.map(|(_, end)| end),
                action_items,
                priority,
            }
        };

        if metrics.success_rate >= SUCCESS_PRAISE_THRESHOLD {
            insights.push(base(
                InsightType::Positive,
                "Your decisions are paying off",
                format!(
                    "{:.0}% of your tracked outcomes this period were positive. Whatever you're doing, keep doing it.",
                    metrics.success_rate * 100.0
                ),
                json!({ "success_rate": metrics.success_rate }),
                None,
                6,
            ));
        } else if metrics.success_rate < SUCCESS_ALERT_THRESHOLD {
            insights.push(base(
                InsightType::Alert,
                "Outcomes are trending below half",
                format!(
                    "Only {:.0}% of your tracked outcomes were positive this period.",
                    metrics.success_rate * 100.0
                ),
                json!({ "success_rate": metrics.success_rate }),
                Some(vec![
                    "Revisit one recent decision that went sideways and note what you'd change".to_string(),
                    "Log pros and cons before deciding, not after".to_string(),
                ]),
                8,
            ));
        }

        if metrics.fatigue_score >= FATIGUE_ALERT_THRESHOLD {
            insights.push(base(
                InsightType::Alert,
                "Decision fatigue is running high",
                format!(
                    "Your fatigue score hit {:.1}/10 this period: lots of urgent, slow, or unfinished decisions.",
                    metrics.fatigue_score
                ),
                json!({ "fatigue_score": metrics.fatigue_score }),
                Some(vec![
                    "Batch small decisions into one sitting".to_string(),
                    "Defer anything that isn't actually urgent".to_string(),
                    "Close out or drop decisions that have gone stale".to_string(),
                ]),
                9,
            ));
        }

        for (bias, fraction) in &metrics.bias_fractions {
            if *fraction <= BIAS_THRESHOLD {
                continue;
            }
            // Biases without a template are counted but not surfaced.
            let (title, text) = match bias.as_str() {
                FIRST_OPTION_BIAS => (
                    "You often pick the first option",
                    "You chose the first-listed option in a large share of decisions. Try writing your gut pick last.",
                ),
                OVERCONFIDENCE_BIAS => (
                    "Confidence is running hot",
                    "You rated yourself highly confident on most decisions. High confidence is great when the outcomes back it up.",
                ),
                ANALYSIS_PARALYSIS => (
                    "Decisions are taking a long time",
                    "Many decisions took over ten minutes to settle. For reversible choices, faster is usually fine.",
                ),
                _ => continue,
            };
            insights.push(base(
                InsightType::BiasWarning,
                title,
                text.to_string(),
                json!({ "bias": bias, "fraction": fraction }),
                None,
                7,
            ));
        }

        // Fold seeded with a zeroed sentinel. When every category has zero
        // positive outcomes the winner among zero-rate categories is
        // arbitrary; the sample-count guard keeps that from surfacing.
        let sentinel = CategoryStats::default();
        let (best_name, best) = metrics.category_performance.iter().fold(
            ("none", &sentinel),
            |(best_name, best), (name, stats)| {
                if stats.positive_rate() > best.positive_rate() {
                    (name.as_str(), stats)
                } else {
                    (best_name, best)
                }
            },
        );
        if best.total >= CATEGORY_STRENGTH_MIN_SAMPLES {
            let mut insight = base(
                InsightType::CategoryStrength,
                "You decide well in this area",
                format!(
                    "Your {} decisions succeeded {:.0}% of the time across {} decisions this period.",
                    best_name,
                    best.positive_rate() * 100.0,
                    best.total
                ),
                json!({ "category": best_name, "positive_rate": best.positive_rate() }),
                None,
                4,
            );
            insight.category = Some(best_name.to_string());
            insights.push(insight);
        }

        insights
    }
}
