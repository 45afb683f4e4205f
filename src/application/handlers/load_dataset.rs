//! LoadDatasetHandler - Loads a dataset and publishes its summary and first ranking.

use std::sync::Arc;

use tracing::warn;

use crate::application::session::{LoadOutcome, RankingSession, SessionError};
use crate::domain::ranking::RawTable;
use crate::ports::RankingPublisher;

/// Command to load a dataset into the session.
#[derive(Debug, Clone)]
pub struct LoadDatasetCommand {
    pub alternatives: RawTable,
    pub criteria: RawTable,
}

/// Handler for loading datasets.
pub struct LoadDatasetHandler {
    session: Arc<RankingSession>,
    publisher: Arc<dyn RankingPublisher>,
}

impl LoadDatasetHandler {
    pub fn new(session: Arc<RankingSession>, publisher: Arc<dyn RankingPublisher>) -> Self {
        Self { session, publisher }
    }

    /// Loads the dataset. On failure the user is alerted and the previous
    /// dataset (if any) stays active.
    pub async fn handle(&self, cmd: LoadDatasetCommand) -> Result<LoadOutcome, SessionError> {
        let outcome = match self.session.load(&cmd.alternatives, &cmd.criteria).await {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(session_id = %self.session.id(), error = %err, "Dataset load failed");
                self.publisher
                    .publish_alert(&err.to_string())
                    .await
                    .map_err(SessionError::Publish)?;
                return Err(err);
            }
        };

        self.publisher
            .publish_summary(&outcome.summary)
            .await
            .map_err(SessionError::Publish)?;
        self.publisher
            .publish_ranking(&outcome.snapshot)
            .await
            .map_err(SessionError::Publish)?;

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryRankingPublisher, MockEngineFactory};
    use crate::application::session::SessionSettings;
    use crate::domain::ranking::raw_table;
    use crate::ports::EngineError;

    fn command() -> LoadDatasetCommand {
        LoadDatasetCommand {
            alternatives: raw_table(vec![vec!["id", "cost"], vec!["1", "5"], vec!["2", "7"]]),
            criteria: raw_table(vec![
                vec!["index", "name", "weight", "direction", "preference_function", "q", "p"],
                vec!["0", "cost", "1", "-1", "usual", "0", "0"],
            ]),
        }
    }

    fn handler(
        factory: MockEngineFactory,
    ) -> (LoadDatasetHandler, Arc<InMemoryRankingPublisher>, Arc<RankingSession>) {
        let session = Arc::new(RankingSession::new(
            Arc::new(factory),
            SessionSettings::default(),
        ));
        let publisher = Arc::new(InMemoryRankingPublisher::new());
        (
            LoadDatasetHandler::new(session.clone(), publisher.clone()),
            publisher,
            session,
        )
    }

    #[tokio::test]
    async fn publishes_summary_then_ranking() {
        let (handler, publisher, session) = handler(MockEngineFactory::new());

        handler.handle(command()).await.unwrap();

        assert!(session.is_ready().await);
        assert_eq!(publisher.summaries().len(), 1);
        assert_eq!(
            publisher.summaries()[0].text,
            "2 records loaded. Computing 4 pairwise comparisons."
        );
        assert_eq!(publisher.rankings().len(), 1);
        assert!(publisher.alerts().is_empty());
    }

    #[tokio::test]
    async fn engine_rejection_publishes_alert() {
        let factory =
            MockEngineFactory::new().failing_construct(EngineError::invalid_parameters("bad p"));
        let (handler, publisher, session) = handler(factory);

        let result = handler.handle(command()).await;

        assert!(matches!(result, Err(SessionError::EngineConstruction(_))));
        assert!(!session.is_ready().await);
        assert_eq!(publisher.alerts().len(), 1);
        assert!(publisher.alerts()[0].contains("bad p"));
        assert!(publisher.rankings().is_empty());
    }

    #[tokio::test]
    async fn publish_failure_is_reported() {
        let session = Arc::new(RankingSession::new(
            Arc::new(MockEngineFactory::new()),
            SessionSettings::default(),
        ));
        let handler =
            LoadDatasetHandler::new(session, Arc::new(InMemoryRankingPublisher::failing()));

        let result = handler.handle(command()).await;
        assert!(matches!(result, Err(SessionError::Publish(_))));
    }
}
