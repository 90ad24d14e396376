//! WeeklyReview - metrics computation and insight delivery for one user.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::domain::foundation::UserId;
use crate::domain::metrics::{InsightGenerator, MetricsAnalyzer, UserMetrics};
use crate::ports::{DecisionStore, InsightSink, ReviewWindow, StoreError};

/// Error raised while running a review.
#[derive(Debug, Error)]
pub enum ReviewError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result of one review run.
#[derive(Debug, Clone)]
pub struct WeeklyReviewResult {
    pub metrics: UserMetrics,
    /// How many insights were generated and forwarded to the sink.
    pub insights_stored: usize,
}

/// Handler for the periodic review: fetch the window's records, fold them
/// into metrics, and push any generated insights to the sink.
pub struct WeeklyReviewHandler<S: DecisionStore, K: InsightSink> {
    store: Arc<S>,
    sink: Arc<K>,
}

impl<S: DecisionStore, K: InsightSink> WeeklyReviewHandler<S, K> {
    pub fn new(store: Arc<S>, sink: Arc<K>) -> Self {
        Self { store, sink }
    }

    pub async fn handle(
        &self,
        user_id: &UserId,
        window: ReviewWindow,
    ) -> Result<WeeklyReviewResult, ReviewError> {
        let decisions = self.store.decisions_for(user_id, window).await?;
        let outcomes = self.store.outcomes_for(user_id, window).await?;

        let metrics = MetricsAnalyzer::compute(&decisions, &outcomes);
        // An empty window produces all-zero metrics; generating insights
        // from those would alert users who simply logged nothing.
        let insights = if decisions.is_empty() && outcomes.is_empty() {
            Vec::new()
        } else {
            InsightGenerator::generate(user_id, &metrics, Some((window.start, window.end)))
        };
        let insights_stored = insights.len();

        if !insights.is_empty() {
            self.sink.store_insights(insights).await?;
        }

        info!(
            user = %user_id,
            decisions = decisions.len(),
            outcomes = outcomes.len(),
            insights = insights_stored,
            "weekly review completed"
        );

        Ok(WeeklyReviewResult {
            metrics,
            insights_stored,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryDecisionStore, InMemoryInsightSink};
    use crate::domain::foundation::{DecisionId, OutcomeId, Urgency};
    use crate::domain::metrics::{DecisionRecord, OutcomeRecord, OutcomeType};
    use chrono::{Duration, Utc};

    fn user() -> UserId {
        UserId::new("u1").unwrap()
    }

    fn decision(days_ago: i64) -> DecisionRecord {
        DecisionRecord {
            id: DecisionId::new(),
            user_id: user(),
            title: "t".to_string(),
            category: Some("work".to_string()),
            urgency: Urgency::Medium,
            options: vec![],
            chosen_option: None,
            confidence_score: Some(0.5),
            time_to_decide: Some(60),
            is_completed: true,
            created_at: Utc::now() - Duration::days(days_ago),
        }
    }

    #[tokio::test]
    async fn empty_history_yields_zero_metrics_and_no_insights() {
        let store = Arc::new(InMemoryDecisionStore::new());
        let sink = Arc::new(InMemoryInsightSink::new());
        let handler = WeeklyReviewHandler::new(store, Arc::clone(&sink));

        let result = handler
            .handle(&user(), ReviewWindow::trailing_days(7))
            .await
            .unwrap();

        assert_eq!(result.metrics.fatigue_score, 0.0);
        assert_eq!(result.insights_stored, 0);
        assert_eq!(sink.insight_count(), 0);
    }

    #[tokio::test]
    async fn positive_outcomes_produce_a_stored_insight() {
        let store = Arc::new(InMemoryDecisionStore::new());
        let sink = Arc::new(InMemoryInsightSink::new());
        for _ in 0..3 {
            let record = decision(1);
            let decision_id = record.id;
            store.add_decision(record);
            store.add_outcome(OutcomeRecord {
                id: OutcomeId::new(),
                decision_id,
                user_id: user(),
                outcome_type: OutcomeType::Positive,
                outcome_score: None,
            });
        }
        let handler = WeeklyReviewHandler::new(store, Arc::clone(&sink));

        let result = handler
            .handle(&user(), ReviewWindow::trailing_days(7))
            .await
            .unwrap();

        assert_eq!(result.metrics.success_rate, 1.0);
        assert!(result.insights_stored >= 1);
        assert_eq!(sink.insight_count(), result.insights_stored);
    }

    #[tokio::test]
    async fn decisions_outside_the_window_are_ignored() {
        let store = Arc::new(InMemoryDecisionStore::new());
        let sink = Arc::new(InMemoryInsightSink::new());
        store.add_decision(decision(30));
        let handler = WeeklyReviewHandler::new(store, sink);

        let result = handler
            .handle(&user(), ReviewWindow::trailing_days(7))
            .await
            .unwrap();

        assert_eq!(result.metrics.productivity_score, 0.0);
        assert!(result.metrics.category_performance.is_empty());
    }
}
