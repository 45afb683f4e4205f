//! RankingPublisher port - Interface for the presentation layer.
//!
//! The core emits one summary per load, one ranking per completed cycle and
//! an alert when a load is aborted. Rendering (terminal, web, ...) lives in
//! the adapters.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::ranking::{LoadSummary, RankingSnapshot};

/// Port for publishing ranking results.
///
/// Implementations must:
/// - Render or forward results in the order they are published
/// - Propagate delivery failures to the caller
#[async_trait]
pub trait RankingPublisher: Send + Sync {
    /// Publish the summary shown once after a successful load.
    async fn publish_summary(&self, summary: &LoadSummary) -> Result<(), DomainError>;

    /// Publish the ranking of one completed cycle.
    async fn publish_ranking(&self, snapshot: &RankingSnapshot) -> Result<(), DomainError>;

    /// Publish a user-visible alert (e.g. the engine rejected the dataset).
    async fn publish_alert(&self, message: &str) -> Result<(), DomainError>;
}
