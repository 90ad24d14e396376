//! InsightSink port for persisting generated insights.

use async_trait::async_trait;

use crate::domain::metrics::Insight;

use super::decision_store::StoreError;

/// Write access for the insights a weekly review produces.
#[async_trait]
pub trait InsightSink: Send + Sync {
    /// Persists a batch of insights. Ordering is preserved.
    async fn store_insights(&self, insights: Vec<Insight>) -> Result<(), StoreError>;
}
