//! AdjustWeightHandler - Applies one weight edit and publishes the new ranking.

use std::sync::Arc;

use crate::application::session::{CycleOutcome, RankingSession, SessionError};
use crate::domain::ranking::NudgeDirection;
use crate::ports::RankingPublisher;

/// How the weight changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeightAdjustment {
    /// Absolute value, e.g. from a slider.
    Set(f64),
    /// One step, e.g. from a wheel or key press.
    Nudge(NudgeDirection),
}

/// Command to adjust one criterion's weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustWeightCommand {
    /// 0-based criterion index.
    pub criterion: usize,
    pub adjustment: WeightAdjustment,
}

/// Handler for weight edits.
pub struct AdjustWeightHandler {
    session: Arc<RankingSession>,
    publisher: Arc<dyn RankingPublisher>,
}

impl AdjustWeightHandler {
    pub fn new(session: Arc<RankingSession>, publisher: Arc<dyn RankingPublisher>) -> Self {
        Self { session, publisher }
    }

    /// Rejected edits return an error and leave the last ranking in place.
    pub async fn handle(&self, cmd: AdjustWeightCommand) -> Result<CycleOutcome, SessionError> {
        let outcome = match cmd.adjustment {
            WeightAdjustment::Set(value) => self.session.set_weight(cmd.criterion, value).await?,
            WeightAdjustment::Nudge(direction) => {
                self.session.nudge_weight(cmd.criterion, direction).await?
            }
        };

        if let CycleOutcome::Completed(snapshot) = &outcome {
            self.publisher
                .publish_ranking(snapshot)
                .await
                .map_err(SessionError::Publish)?;
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryRankingPublisher, MockEngineFactory};
    use crate::application::session::SessionSettings;
    use crate::domain::ranking::raw_table;

    async fn loaded_session() -> Arc<RankingSession> {
        let session = Arc::new(RankingSession::new(
            Arc::new(MockEngineFactory::new()),
            SessionSettings::default(),
        ));
        session
            .load(
                &raw_table(vec![vec!["id", "a", "b"], vec!["1", "1", "2"], vec!["2", "2", "1"]]),
                &raw_table(vec![
                    vec!["index", "name", "weight", "direction", "preference_function", "q", "p"],
                    vec!["0", "a", "1", "1", "usual", "0", "0"],
                    vec!["1", "b", "1", "1", "usual", "0", "0"],
                ]),
            )
            .await
            .unwrap();
        session
    }

    #[tokio::test]
    async fn set_publishes_ranking_with_new_weights() {
        let publisher = Arc::new(InMemoryRankingPublisher::new());
        let handler = AdjustWeightHandler::new(loaded_session().await, publisher.clone());

        let outcome = handler
            .handle(AdjustWeightCommand {
                criterion: 1,
                adjustment: WeightAdjustment::Set(4.2),
            })
            .await
            .unwrap();

        assert!(outcome.is_completed());
        assert_eq!(publisher.last_ranking().unwrap().weights, vec![1.0, 4.2]);
    }

    #[tokio::test]
    async fn nudge_moves_one_step() {
        let publisher = Arc::new(InMemoryRankingPublisher::new());
        let handler = AdjustWeightHandler::new(loaded_session().await, publisher.clone());

        handler
            .handle(AdjustWeightCommand {
                criterion: 0,
                adjustment: WeightAdjustment::Nudge(NudgeDirection::Down),
            })
            .await
            .unwrap();

        assert_eq!(publisher.last_ranking().unwrap().weights, vec![0.9, 1.0]);
    }

    #[tokio::test]
    async fn rejected_edit_publishes_nothing() {
        let publisher = Arc::new(InMemoryRankingPublisher::new());
        let handler = AdjustWeightHandler::new(loaded_session().await, publisher.clone());

        let result = handler
            .handle(AdjustWeightCommand {
                criterion: 7,
                adjustment: WeightAdjustment::Set(2.0),
            })
            .await;

        assert!(matches!(result, Err(SessionError::Weight(_))));
        assert!(publisher.published().is_empty());
    }

    #[tokio::test]
    async fn edit_before_load_is_not_ready() {
        let publisher = Arc::new(InMemoryRankingPublisher::new());
        let session = Arc::new(RankingSession::new(
            Arc::new(MockEngineFactory::new()),
            SessionSettings::default(),
        ));
        let handler = AdjustWeightHandler::new(session, publisher.clone());

        let outcome = handler
            .handle(AdjustWeightCommand {
                criterion: 0,
                adjustment: WeightAdjustment::Set(2.0),
            })
            .await
            .unwrap();

        assert_eq!(outcome, CycleOutcome::NotReady);
        assert!(publisher.published().is_empty());
    }
}
