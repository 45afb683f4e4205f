//! RecomputeRankingHandler - Forces a cycle with the current weights.

use std::sync::Arc;

use crate::application::session::{CycleOutcome, RankingSession, SessionError};
use crate::ports::RankingPublisher;

/// Command to rerun the ranking cycle.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecomputeRankingCommand;

pub struct RecomputeRankingHandler {
    session: Arc<RankingSession>,
    publisher: Arc<dyn RankingPublisher>,
}

impl RecomputeRankingHandler {
    pub fn new(session: Arc<RankingSession>, publisher: Arc<dyn RankingPublisher>) -> Self {
        Self { session, publisher }
    }

    pub async fn handle(&self, _cmd: RecomputeRankingCommand) -> Result<CycleOutcome, SessionError> {
        let outcome = self.session.recompute().await?;
        if let CycleOutcome::Completed(snapshot) = &outcome {
            self.publisher
                .publish_ranking(snapshot)
                .await
                .map_err(SessionError::Publish)?;
        }
        Ok(outcome)
    }
}
