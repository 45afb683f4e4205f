//! In-memory ranking publisher for testing.
//!
//! Captures everything the core publishes, in order, so tests can assert
//! on summaries, rankings and alerts without a renderer.
//!
//! # Security Note
//!
//! This adapter is for **testing only**. It uses `.expect()` on lock
//! operations which will panic if locks are poisoned.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::ranking::{LoadSummary, RankingSnapshot};
use crate::ports::RankingPublisher;

/// One captured publication.
#[derive(Debug, Clone, PartialEq)]
pub enum Published {
    Summary(LoadSummary),
    Ranking(RankingSnapshot),
    Alert(String),
}

/// In-memory publisher for testing.
///
/// # Panics
///
/// Methods may panic if internal locks are poisoned.
///
/// # Example
///
/// ```ignore
/// let publisher = Arc::new(InMemoryRankingPublisher::new());
/// handler.handle(cmd).await?;
/// assert_eq!(publisher.rankings().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryRankingPublisher {
    published: RwLock<Vec<Published>>,
    fail: bool,
}

impl InMemoryRankingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// A publisher that rejects every publication.
    pub fn failing() -> Self {
        Self {
            published: RwLock::new(Vec::new()),
            fail: true,
        }
    }

    // === Test Helpers ===

    /// Everything published so far, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn published(&self) -> Vec<Published> {
        self.published
            .read()
            .expect("InMemoryRankingPublisher: lock poisoned")
            .clone()
    }

    pub fn summaries(&self) -> Vec<LoadSummary> {
        self.published()
            .into_iter()
            .filter_map(|p| match p {
                Published::Summary(s) => Some(s),
                _ => None,
            })
            .collect()
    }

    pub fn rankings(&self) -> Vec<RankingSnapshot> {
        self.published()
            .into_iter()
            .filter_map(|p| match p {
                Published::Ranking(r) => Some(r),
                _ => None,
            })
            .collect()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.published()
            .into_iter()
            .filter_map(|p| match p {
                Published::Alert(a) => Some(a),
                _ => None,
            })
            .collect()
    }

    /// Most recent ranking, if any.
    pub fn last_ranking(&self) -> Option<RankingSnapshot> {
        self.rankings().pop()
    }

    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn clear(&self) {
        self.published
            .write()
            .expect("InMemoryRankingPublisher: lock poisoned")
            .clear();
    }

    fn push(&self, item: Published) -> Result<(), DomainError> {
        if self.fail {
            return Err(DomainError::new(
                ErrorCode::PublishFailed,
                "Publisher configured to fail",
            ));
        }
        self.published
            .write()
            .expect("InMemoryRankingPublisher: lock poisoned")
            .push(item);
        Ok(())
    }
}

#[async_trait]
impl RankingPublisher for InMemoryRankingPublisher {
    async fn publish_summary(&self, summary: &LoadSummary) -> Result<(), DomainError> {
        self.push(Published::Summary(summary.clone()))
    }

    async fn publish_ranking(&self, snapshot: &RankingSnapshot) -> Result<(), DomainError> {
        self.push(Published::Ranking(snapshot.clone()))
    }

    async fn publish_alert(&self, message: &str) -> Result<(), DomainError> {
        self.push(Published::Alert(message.to_string()))
    }
}
