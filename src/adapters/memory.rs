//! In-memory store and sink implementations for testing.
//!
//! Deterministic, lock-backed stand-ins for a persistence layer. Methods
//! use `.expect()` on lock operations and will panic if locks are
//! poisoned, which is acceptable for test code only.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::foundation::UserId;
use crate::domain::metrics::{DecisionRecord, Insight, OutcomeRecord};
use crate::ports::{DecisionStore, InsightSink, ReviewWindow, StoreError};

/// In-memory decision store for testing.
///
/// Seed it with records, then hand it to a handler; `decisions_for`
/// filters by user and window the way a real backend would.
pub struct InMemoryDecisionStore {
    decisions: RwLock<Vec<DecisionRecord>>,
    outcomes: RwLock<Vec<OutcomeRecord>>,
}

impl InMemoryDecisionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            decisions: RwLock::new(Vec::new()),
            outcomes: RwLock::new(Vec::new()),
        }
    }

    /// Adds a decision record.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn add_decision(&self, record: DecisionRecord) {
        self.decisions
            .write()
            .expect("InMemoryDecisionStore: decisions write lock poisoned")
            .push(record);
    }

    /// Adds an outcome record.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn add_outcome(&self, record: OutcomeRecord) {
        self.outcomes
            .write()
            .expect("InMemoryDecisionStore: outcomes write lock poisoned")
            .push(record);
    }
}

impl Default for InMemoryDecisionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DecisionStore for InMemoryDecisionStore {
    async fn decisions_for(
        &self,
        user_id: &UserId,
        window: ReviewWindow,
    ) -> Result<Vec<DecisionRecord>, StoreError> {
        let decisions = self
            .decisions
            .read()
            .expect("InMemoryDecisionStore: decisions lock poisoned");
        Ok(decisions
            .iter()
            .filter(|d| {
                &d.user_id == user_id && d.created_at >= window.start && d.created_at < window.end
            })
            .cloned()
            .collect())
    }

    async fn outcomes_for(
        &self,
        user_id: &UserId,
        window: ReviewWindow,
    ) -> Result<Vec<OutcomeRecord>, StoreError> {
        // Outcomes carry no timestamp; scope them by their decision's window.
        let decision_ids: Vec<_> = self
            .decisions_for(user_id, window)
            .await?
            .into_iter()
            .map(|d| d.id)
            .collect();
        let outcomes = self
            .outcomes
            .read()
            .expect("InMemoryDecisionStore: outcomes lock poisoned");
        Ok(outcomes
            .iter()
            .filter(|o| &o.user_id == user_id && decision_ids.contains(&o.decision_id))
            .cloned()
            .collect())
    }
}

/// In-memory insight sink for testing.
///
/// Captures stored insights for assertions.
pub struct InMemoryInsightSink {
    stored: RwLock<Vec<Insight>>,
}

impl InMemoryInsightSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self {
            stored: RwLock::new(Vec::new()),
        }
    }

    /// Returns all stored insights (for test assertions).
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn stored_insights(&self) -> Vec<Insight> {
        self.stored
            .read()
            .expect("InMemoryInsightSink: stored lock poisoned")
            .clone()
    }

    /// Returns count of stored insights.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn insight_count(&self) -> usize {
        self.stored
            .read()
            .expect("InMemoryInsightSink: stored lock poisoned")
            .len()
    }
}

impl Default for InMemoryInsightSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InsightSink for InMemoryInsightSink {
    async fn store_insights(&self, insights: Vec<Insight>) -> Result<(), StoreError> {
        self.stored
            .write()
            .expect("InMemoryInsightSink: stored write lock poisoned")
            .extend(insights);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DecisionId, Urgency};
    use chrono::{Duration, Utc};

    fn record(user: &str, days_ago: i64) -> DecisionRecord {
        DecisionRecord {
            id: DecisionId::new(),
            user_id: UserId::new(user).unwrap(),
            title: "t".to_string(),
            category: None,
            urgency: Urgency::Medium,
            options: vec![],
            chosen_option: None,
            confidence_score: None,
            time_to_decide: None,
            is_completed: false,
            created_at: Utc::now() - Duration::days(days_ago),
        }
    }

    #[tokio::test]
    async fn decisions_are_filtered_by_user_and_window() {
        let store = InMemoryDecisionStore::new();
        store.add_decision(record("u1", 2));
        store.add_decision(record("u1", 30));
        store.add_decision(record("u2", 2));

        let window = ReviewWindow::trailing_days(7);
        let user = UserId::new("u1").unwrap();
        let found = store.decisions_for(&user, window).await.unwrap();

        assert_eq!(found.len(), 1);
    }

    #[tokio::test]
    async fn outcomes_follow_their_decision_window() {
        let store = InMemoryDecisionStore::new();
        let inside = record("u1", 2);
        let outside = record("u1", 30);
        let inside_id = inside.id;
        let outside_id = outside.id;
        store.add_decision(inside);
        store.add_decision(outside);
        for decision_id in [inside_id, outside_id] {
            store.add_outcome(OutcomeRecord {
                id: crate::domain::foundation::OutcomeId::new(),
                decision_id,
                user_id: UserId::new("u1").unwrap(),
                outcome_type: crate::domain::metrics::OutcomeType::Positive,
                outcome_score: None,
            });
        }

        let window = ReviewWindow::trailing_days(7);
        let user = UserId::new("u1").unwrap();
        let found = store.outcomes_for(&user, window).await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].decision_id, inside_id);
    }

    #[tokio::test]
    async fn sink_captures_insights() {
        let sink = InMemoryInsightSink::new();
        assert_eq!(sink.insight_count(), 0);
        sink.store_insights(Vec::new()).await.unwrap();
        assert_eq!(sink.insight_count(), 0);
    }
}
