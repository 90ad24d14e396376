//! Weekly Metrics Analyzer - pure reductions over a user's history.

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::{NaiveDate, Timelike};

use super::records::{DecisionRecord, OutcomeRecord};
use super::user_metrics::{
    CategoryStats, TimePatterns, UserMetrics, ANALYSIS_PARALYSIS, FIRST_OPTION_BIAS,
    LAST_OPTION_BIAS, OVERCONFIDENCE_BIAS,
};

/// Cap applied to each of the four fatigue components.
const FATIGUE_COMPONENT_CAP: f64 = 2.5;

/// Total fatigue cap.
const FATIGUE_CAP: f64 = 10.0;

/// Confidence above which a decision counts toward overconfidence.
const OVERCONFIDENCE_THRESHOLD: f64 = 0.8;

/// Seconds of deliberation above which a decision counts as paralysis.
const PARALYSIS_THRESHOLD_SECS: u32 = 600;

/// Stateless analyzer over a window of decision and outcome records.
///
/// Every function is a total, deterministic reduction: empty input yields
/// zeros and empty mappings, never an error.
pub struct MetricsAnalyzer;

impl MetricsAnalyzer {
    /// Computes the full metrics snapshot in one pass per signal.
    pub fn compute(decisions: &[DecisionRecord], outcomes: &[OutcomeRecord]) -> UserMetrics {
        UserMetrics {
            success_rate: Self::success_rate(outcomes),
            fatigue_score: Self::fatigue_score(decisions),
            productivity_score: Self::productivity_score(decisions),
            bias_fractions: Self::bias_fractions(decisions),
            category_performance: Self::category_performance(decisions, outcomes),
            time_patterns: Self::time_patterns(decisions),
        }
    }

    /// Fraction of outcomes judged successful (positive, or rated 7+).
    ///
    /// # Edge Cases
    /// - Empty outcomes: returns 0
    pub fn success_rate(outcomes: &[OutcomeRecord]) -> f64 {
        if outcomes.is_empty() {
            return 0.0;
        }
        let successful = outcomes.iter().filter(|o| o.is_successful()).count();
        successful as f64 / outcomes.len() as f64
    }

    /// Decision-fatigue estimate in [0, 10].
    ///
    /// Four signals, each capped at 2.5: decisions per active day,
    /// high/critical urgency share, average deliberation time, and the
    /// share of incomplete decisions.
    ///
    /// # Edge Cases
    /// - Empty decisions: returns 0
    /// - No recorded deliberation times: that component contributes 0
    pub fn fatigue_score(decisions: &[DecisionRecord]) -> f64 {
        if decisions.is_empty() {
            return 0.0;
        }
        let total = decisions.len() as f64;

        let active_days: HashSet<NaiveDate> =
            decisions.iter().map(|d| d.created_at.date_naive()).collect();
        let per_day = total / active_days.len() as f64;
        let volume = (per_day / 5.0).min(FATIGUE_COMPONENT_CAP);

        let urgent = decisions
            .iter()
            .filter(|d| d.urgency.is_time_pressured())
            .count() as f64;
        let urgency = (urgent / total) * FATIGUE_COMPONENT_CAP;

        let times: Vec<f64> = decisions
            .iter()
            .filter_map(|d| d.time_to_decide.map(f64::from))
            .collect();
        let slowness = if times.is_empty() {
            0.0
        } else {
            let avg = times.iter().sum::<f64>() / times.len() as f64;
            (avg / 300.0).min(FATIGUE_COMPONENT_CAP)
        };

        let incomplete = decisions.iter().filter(|d| !d.is_completed).count() as f64;
        let incompletion = (incomplete / total) * FATIGUE_COMPONENT_CAP;

        (volume + urgency + slowness + incompletion).min(FATIGUE_CAP)
    }

    /// Percentage of decisions marked completed, in [0, 100].
    pub fn productivity_score(decisions: &[DecisionRecord]) -> f64 {
        if decisions.is_empty() {
            return 0.0;
        }
        let completed = decisions.iter().filter(|d| d.is_completed).count();
        completed as f64 / decisions.len() as f64 * 100.0
    }

    /// Per-category totals, successful-outcome counts, and mean confidence
    /// (missing confidence counted as 0).
    pub fn category_performance(
        decisions: &[DecisionRecord],
        outcomes: &[OutcomeRecord],
    ) -> BTreeMap<String, CategoryStats> {
        let successful_by_decision: HashMap<_, _> = outcomes
            .iter()
            .map(|o| (o.decision_id, o.is_successful()))
            .collect();

        let mut confidence_sums: BTreeMap<String, f64> = BTreeMap::new();
        let stats = decisions.iter().fold(
            BTreeMap::<String, CategoryStats>::new(),
            |mut acc, decision| {
                let category = decision.category_or_default().to_string();
                let entry = acc.entry(category.clone()).or_default();
                entry.total += 1;
                if successful_by_decision
                    .get(&decision.id)
                    .copied()
                    .unwrap_or(false)
                {
                    entry.positive += 1;
                }
                *confidence_sums.entry(category).or_insert(0.0) +=
                    decision.confidence_score.unwrap_or(0.0);
                acc
            },
        );

        stats
            .into_iter()
            .map(|(category, mut entry)| {
                entry.avg_confidence =
                    confidence_sums.get(&category).copied().unwrap_or(0.0) / f64::from(entry.total);
                (category, entry)
            })
            .collect()
    }

    /// Buckets decisions by creation hour into the four fixed ranges.
    pub fn time_patterns(decisions: &[DecisionRecord]) -> TimePatterns {
        decisions
            .iter()
            .fold(TimePatterns::default(), |patterns, d| {
                patterns.record_hour(d.created_at.hour())
            })
    }

    /// Fraction of decisions exhibiting each recurring bias pattern.
    ///
    /// First/last-option counts only consider decisions with both a
    /// non-empty option list and a chosen option. Every counter is divided
    /// by the total decision count.
    ///
    /// # Edge Cases
    /// - Empty decisions: returns an empty mapping
    pub fn bias_fractions(decisions: &[DecisionRecord]) -> BTreeMap<String, f64> {
        if decisions.is_empty() {
            return BTreeMap::new();
        }
        let total = decisions.len() as f64;

        let (first, last, overconfident, paralyzed) = decisions.iter().fold(
            (0u32, 0u32, 0u32, 0u32),
            |(mut first, mut last, mut overconfident, mut paralyzed), d| {
                if let (Some(chosen), false) = (&d.chosen_option, d.options.is_empty()) {
                    if d.options.first() == Some(chosen) {
                        first += 1;
                    }
                    if d.options.last() == Some(chosen) {
                        last += 1;
                    }
                }
                if d.confidence_score.unwrap_or(0.0) > OVERCONFIDENCE_THRESHOLD {
                    overconfident += 1;
                }
                if d.time_to_decide.unwrap_or(0) > PARALYSIS_THRESHOLD_SECS {
                    paralyzed += 1;
                }
                (first, last, overconfident, paralyzed)
            },
        );

        BTreeMap::from([
            (FIRST_OPTION_BIAS.to_string(), f64::from(first) / total),
            (LAST_OPTION_BIAS.to_string(), f64::from(last) / total),
            (OVERCONFIDENCE_BIAS.to_string(), f64::from(overconfident) / total),
            (ANALYSIS_PARALYSIS.to_string(), f64::from(paralyzed) / total),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DecisionId, OptionId, OutcomeId, Urgency, UserId};
    use crate::domain::metrics::records::OutcomeType;
    use chrono::{TimeZone, Utc};

    fn decision(hour: u32) -> DecisionRecord {
        DecisionRecord {
            id: DecisionId::new(),
            user_id: UserId::new("u1").unwrap(),
            title: "t".to_string(),
            category: None,
            urgency: Urgency::Medium,
            options: vec![],
            chosen_option: None,
            confidence_score: None,
            time_to_decide: None,
            is_completed: true,
            created_at: Utc.with_ymd_and_hms(2024, 3, 4, hour, 0, 0).unwrap(),
        }
    }

    fn outcome(decision_id: DecisionId, outcome_type: OutcomeType, score: Option<u8>) -> OutcomeRecord {
        OutcomeRecord {
            id: OutcomeId::new(),
            decision_id,
            user_id: UserId::new("u1").unwrap(),
            outcome_type,
            outcome_score: score,
        }
    }

    #[test]
    fn success_rate_of_empty_history_is_zero() {
        assert_eq!(MetricsAnalyzer::success_rate(&[]), 0.0);
    }

    #[test]
    fn fatigue_of_empty_history_is_zero() {
        assert_eq!(MetricsAnalyzer::fatigue_score(&[]), 0.0);
    }

    #[test]
    fn success_rate_counts_positive_and_high_scores() {
        let id = DecisionId::new();
        let outcomes = vec![
            outcome(id, OutcomeType::Positive, None),
            outcome(id, OutcomeType::Neutral, Some(8)),
            outcome(id, OutcomeType::Negative, Some(3)),
            outcome(id, OutcomeType::Neutral, None),
        ];
        assert!((MetricsAnalyzer::success_rate(&outcomes) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn fatigue_saturates_near_ten_under_maximal_load() {
        // 5 critical, slow, incomplete decisions on a single day.
        let decisions: Vec<DecisionRecord> = (0..5)
            .map(|i| {
                let mut d = decision(10);
                d.urgency = Urgency::Critical;
                d.time_to_decide = Some(900);
                d.is_completed = false;
                d.created_at = Utc.with_ymd_and_hms(2024, 3, 4, 9, i, 0).unwrap();
                d
            })
            .collect();

        let fatigue = MetricsAnalyzer::fatigue_score(&decisions);
        // volume: min(5/5, 2.5) = 1.0; urgency 2.5; slowness min(3, 2.5) = 2.5;
        // incompletion 2.5 -> 8.5 total.
        assert!((fatigue - 8.5).abs() < 1e-9);
        assert!(fatigue <= 10.0);
    }

    #[test]
    fn fatigue_ignores_missing_deliberation_times() {
        let decisions = vec![decision(10), decision(11)];
        // No time_to_decide anywhere: slowness contributes 0.
        let fatigue = MetricsAnalyzer::fatigue_score(&decisions);
        // volume: min(2/5, 2.5) = 0.4; urgency 0; incompletion 0.
        assert!((fatigue - 0.4).abs() < 1e-9);
    }

    #[test]
    fn productivity_is_completed_percentage() {
        let mut incomplete = decision(10);
        incomplete.is_completed = false;
        let decisions = vec![decision(10), decision(11), incomplete];
        let productivity = MetricsAnalyzer::productivity_score(&decisions);
        assert!((productivity - 66.66666666666667).abs() < 1e-9);
    }

    #[test]
    fn first_option_bias_matches_expected_fraction() {
        // 10 decisions, first option chosen in 5 of them.
        let decisions: Vec<DecisionRecord> = (0..10)
            .map(|i| {
                let mut d = decision(10);
                d.options = vec![OptionId::new("a"), OptionId::new("b")];
                d.chosen_option = Some(OptionId::new(if i < 5 { "a" } else { "b" }));
                d
            })
            .collect();

        let fractions = MetricsAnalyzer::bias_fractions(&decisions);
        assert!((fractions[FIRST_OPTION_BIAS] - 0.5).abs() < 1e-9);
        assert!((fractions[LAST_OPTION_BIAS] - 0.5).abs() < 1e-9);
    }

    #[test]
    fn overconfidence_and_paralysis_use_strict_thresholds() {
        let mut at_threshold = decision(10);
        at_threshold.confidence_score = Some(0.8);
        at_threshold.time_to_decide = Some(600);
        let mut over = decision(10);
        over.confidence_score = Some(0.81);
        over.time_to_decide = Some(601);

        let fractions = MetricsAnalyzer::bias_fractions(&[at_threshold, over]);
        assert!((fractions[OVERCONFIDENCE_BIAS] - 0.5).abs() < 1e-9);
        assert!((fractions[ANALYSIS_PARALYSIS] - 0.5).abs() < 1e-9);
    }

    #[test]
    fn bias_fractions_skip_decisions_without_options_or_choice() {
        let mut no_options = decision(10);
        no_options.chosen_option = Some(OptionId::new("a"));
        let mut no_choice = decision(10);
        no_choice.options = vec![OptionId::new("a")];

        let fractions = MetricsAnalyzer::bias_fractions(&[no_options, no_choice]);
        assert_eq!(fractions[FIRST_OPTION_BIAS], 0.0);
        assert_eq!(fractions[LAST_OPTION_BIAS], 0.0);
    }

    #[test]
    fn empty_decisions_produce_empty_bias_map() {
        assert!(MetricsAnalyzer::bias_fractions(&[]).is_empty());
    }

    #[test]
    fn category_performance_groups_and_averages() {
        let mut work1 = decision(10);
        work1.category = Some("work".to_string());
        work1.confidence_score = Some(0.9);
        let mut work2 = decision(11);
        work2.category = Some("work".to_string());
        // confidence missing: counted as 0 in the mean
        let mut uncategorized = decision(12);
        uncategorized.confidence_score = Some(0.5);

        let outcomes = vec![outcome(work1.id, OutcomeType::Positive, None)];
        let perf =
            MetricsAnalyzer::category_performance(&[work1, work2, uncategorized], &outcomes);

        let work = &perf["work"];
        assert_eq!(work.total, 2);
        assert_eq!(work.positive, 1);
        assert!((work.avg_confidence - 0.45).abs() < 1e-9);

        let general = &perf["general"];
        assert_eq!(general.total, 1);
        assert_eq!(general.positive, 0);
    }

    #[test]
    fn time_patterns_count_all_decisions() {
        let decisions = vec![decision(7), decision(13), decision(18), decision(23)];
        let patterns = MetricsAnalyzer::time_patterns(&decisions);
        assert_eq!(patterns.morning, 1);
        assert_eq!(patterns.afternoon, 1);
        assert_eq!(patterns.evening, 1);
        assert_eq!(patterns.night, 1);
    }

    #[test]
    fn compute_assembles_all_signals() {
        let mut d = decision(10);
        d.is_completed = false;
        let outcomes = vec![outcome(d.id, OutcomeType::Positive, None)];
        let metrics = MetricsAnalyzer::compute(&[d], &outcomes);

        assert_eq!(metrics.success_rate, 1.0);
        assert_eq!(metrics.productivity_score, 0.0);
        assert_eq!(metrics.time_patterns.morning, 1);
        assert_eq!(metrics.category_performance["general"].total, 1);
        assert!(metrics.bias_fractions.contains_key(FIRST_OPTION_BIAS));
    }
}
