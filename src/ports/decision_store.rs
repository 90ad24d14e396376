//! DecisionStore port for fetching a user's decision history.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::UserId;
use crate::domain::metrics::{DecisionRecord, OutcomeRecord};

/// The time window a review covers (typically the trailing 7 or 30 days).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl ReviewWindow {
    /// Window ending now and starting `days` days earlier.
    pub fn trailing_days(days: i64) -> Self {
        let end = Utc::now();
        Self {
            start: end - chrono::Duration::days(days),
            end,
        }
    }
}

/// Error raised by store adapters.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("decision store backend error: {0}")]
    Backend(String),
}

/// Read access to persisted decisions and outcomes.
///
/// The engine never fetches on its own; a caller hands it records obtained
/// through this port.
#[async_trait]
pub trait DecisionStore: Send + Sync {
    /// Fetches a user's decisions within the window, ordered by creation time.
    async fn decisions_for(
        &self,
        user_id: &UserId,
        window: ReviewWindow,
    ) -> Result<Vec<DecisionRecord>, StoreError>;

    /// Fetches the outcomes recorded for a user within the window.
    async fn outcomes_for(
        &self,
        user_id: &UserId,
        window: ReviewWindow,
    ) -> Result<Vec<OutcomeRecord>, StoreError>;
}
