//! RankingSession - The explicit session object behind every interaction.
//!
//! Holds the loaded dataset, the current weights and the constructed engine.
//! Every interaction (load, weight edit, forced recompute) runs while holding
//! the session mutex, so cycles never overlap and queued edits run in the
//! order they arrived.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::config::{AppConfig, ValidationError};
use crate::domain::foundation::{CycleId, DomainError, ErrorCode, SessionId, Timestamp};
use crate::domain::ranking::{
    DataIngestor, LoadError, LoadSummary, LoadedData, MatrixBuilder, NudgeDirection, RankSelector,
    RankingSnapshot, RawRow, ResultPresenter, ShapeError, TiePolicy, WeightBounds, WeightError,
    WeightVector,
};
use crate::ports::{EngineError, EngineFactory, EngineInput, ScoringEngine};

/// Session tunables.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSettings {
    pub max_alternatives: usize,
    pub top_n: usize,
    pub tie_policy: TiePolicy,
    pub bounds: WeightBounds,
}

impl SessionSettings {
    pub fn from_config(config: &AppConfig) -> Result<Self, ValidationError> {
        config.session.validate()?;
        Ok(Self {
            max_alternatives: config.session.max_alternatives,
            top_n: config.session.top_n,
            tie_policy: config.session.tie_policy,
            bounds: config.weights.bounds()?,
        })
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            max_alternatives: 10,
            top_n: 10,
            tie_policy: TiePolicy::default(),
            bounds: WeightBounds::default(),
        }
    }
}

/// Errors raised by session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error("Engine rejected the dataset: {0}")]
    EngineConstruction(EngineError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Weight(#[from] WeightError),

    #[error("Failed to publish: {0}")]
    Publish(DomainError),
}

impl From<SessionError> for DomainError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Load(e) => e.into(),
            SessionError::Shape(e) => e.into(),
            SessionError::EngineConstruction(e) => {
                DomainError::new(ErrorCode::EngineRejected, e.to_string())
            }
            SessionError::Engine(e) => e.into(),
            SessionError::Weight(e) => e.into(),
            SessionError::Publish(e) => e,
        }
    }
}

/// Result of a weight edit or forced recompute.
#[derive(Debug, Clone, PartialEq)]
pub enum CycleOutcome {
    /// A full cycle ran and produced a new ranking.
    Completed(RankingSnapshot),
    /// No dataset is loaded yet; nothing was computed.
    NotReady,
}

impl CycleOutcome {
    pub fn snapshot(&self) -> Option<&RankingSnapshot> {
        match self {
            CycleOutcome::Completed(snapshot) => Some(snapshot),
            CycleOutcome::NotReady => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, CycleOutcome::Completed(_))
    }
}

/// What a successful load produces.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOutcome {
    pub summary: LoadSummary,
    /// Ranking of the initial cycle, computed with default weights.
    pub snapshot: RankingSnapshot,
}

struct SessionState {
    data: LoadedData,
    weights: WeightVector,
    engine: Box<dyn ScoringEngine>,
}

/// One interactive ranking session.
pub struct RankingSession {
    id: SessionId,
    settings: SessionSettings,
    factory: Arc<dyn EngineFactory>,
    state: Mutex<Option<SessionState>>,
}

impl RankingSession {
    pub fn new(factory: Arc<dyn EngineFactory>, settings: SessionSettings) -> Self {
        Self {
            id: SessionId::new(),
            settings,
            factory,
            state: Mutex::new(None),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// True once a dataset has been loaded.
    pub async fn is_ready(&self) -> bool {
        self.state.lock().await.is_some()
    }

    /// Current weights, or `None` before the first load.
    pub async fn weights(&self) -> Option<Vec<f64>> {
        self.state
            .lock()
            .await
            .as_ref()
            .map(|s| s.weights.values().to_vec())
    }

    /// Criterion labels for the weight controls, or `None` before the first load.
    pub async fn criterion_labels(&self) -> Option<Vec<String>> {
        self.state
            .lock()
            .await
            .as_ref()
            .map(|s| s.data.display_columns.criteria().to_vec())
    }

    /// Loads a dataset, constructs its engine and runs the initial cycle.
    ///
    /// The new state replaces the old one only when every step succeeds;
    /// on error the previously loaded dataset stays active.
    pub async fn load(
        &self,
        raw_alternatives: &[RawRow],
        raw_criteria: &[RawRow],
    ) -> Result<LoadOutcome, SessionError> {
        let mut guard = self.state.lock().await;

        let data = DataIngestor::load(
            raw_alternatives,
            raw_criteria,
            self.settings.max_alternatives,
        )?;
        let matrix = MatrixBuilder::transpose(&data.alternatives)?;
        let parameters = MatrixBuilder::criteria_parameters(&data.criteria)?;

        let input = EngineInput {
            matrix: matrix.flatten()?,
            criterion_count: matrix.criterion_count(),
            alternative_count: matrix.alternative_count(),
            parameters,
        };
        let engine = self
            .factory
            .construct(input)
            .map_err(SessionError::EngineConstruction)?;

        let weights = WeightVector::uniform(matrix.criterion_count(), self.settings.bounds);
        let summary = ResultPresenter::summarize(&data.alternatives, &data.criteria);

        let mut state = SessionState {
            data,
            weights,
            engine,
        };
        let snapshot = self.run_cycle(&mut state)?;

        info!(
            session_id = %self.id,
            records = summary.record_count,
            criteria = summary.criterion_count,
            comparisons = summary.comparison_count,
            "Dataset loaded"
        );

        *guard = Some(state);
        Ok(LoadOutcome { summary, snapshot })
    }

    /// Sets one criterion's weight and recomputes.
    pub async fn set_weight(&self, index: usize, value: f64) -> Result<CycleOutcome, SessionError> {
        let mut guard = self.state.lock().await;
        let Some(state) = guard.as_mut() else {
            debug!(session_id = %self.id, "Weight edit before load ignored");
            return Ok(CycleOutcome::NotReady);
        };

        let previous = state.weights.clone();
        let applied = state.weights.set(index, value).map_err(|e| {
            warn!(session_id = %self.id, index, value, error = %e, "Weight edit rejected");
            e
        })?;
        debug!(session_id = %self.id, index, weight = applied, "Weight set");

        self.run_edit_cycle(state, previous)
    }

    /// Moves one criterion's weight a single step and recomputes.
    pub async fn nudge_weight(
        &self,
        index: usize,
        direction: NudgeDirection,
    ) -> Result<CycleOutcome, SessionError> {
        let mut guard = self.state.lock().await;
        let Some(state) = guard.as_mut() else {
            debug!(session_id = %self.id, "Weight nudge before load ignored");
            return Ok(CycleOutcome::NotReady);
        };

        let previous = state.weights.clone();
        let applied = state.weights.nudge(index, direction).map_err(|e| {
            warn!(session_id = %self.id, index, error = %e, "Weight nudge rejected");
            e
        })?;
        debug!(session_id = %self.id, index, weight = applied, ?direction, "Weight nudged");

        self.run_edit_cycle(state, previous)
    }

    /// Runs a cycle with the current weights.
    pub async fn recompute(&self) -> Result<CycleOutcome, SessionError> {
        let mut guard = self.state.lock().await;
        match guard.as_mut() {
            Some(state) => Ok(CycleOutcome::Completed(self.run_cycle(state)?)),
            None => Ok(CycleOutcome::NotReady),
        }
    }

    /// Runs a cycle after an edit; the edit is undone if the cycle fails.
    fn run_edit_cycle(
        &self,
        state: &mut SessionState,
        previous: WeightVector,
    ) -> Result<CycleOutcome, SessionError> {
        match self.run_cycle(state) {
            Ok(snapshot) => Ok(CycleOutcome::Completed(snapshot)),
            Err(err) => {
                warn!(session_id = %self.id, error = %err, "Cycle failed, weight edit reverted");
                state.weights = previous;
                Err(err)
            }
        }
    }

    /// recompute -> apply_weights -> scores -> select -> present.
    fn run_cycle(&self, state: &mut SessionState) -> Result<RankingSnapshot, SessionError> {
        let cycle_id = CycleId::new();

        state.engine.recompute()?;
        debug!(%cycle_id, "Engine recomputed");

        state.engine.apply_weights(state.weights.values())?;
        debug!(%cycle_id, weights = ?state.weights.values(), "Weights applied");

        let scores = state.engine.scores();
        let selected =
            RankSelector::select_top(&scores, self.settings.top_n, self.settings.tie_policy);
        let selected_scores = selected
            .iter()
            .filter_map(|&i| scores.get(i).copied())
            .collect();
        let table = ResultPresenter::present(
            &selected,
            &state.data.alternatives,
            &scores,
            &state.data.display_columns,
        );
        debug!(%cycle_id, selected = selected.len(), "Ranking selected");

        Ok(RankingSnapshot {
            cycle_id,
            session_id: self.id,
            weights: state.weights.values().to_vec(),
            selected,
            selected_scores,
            table,
            computed_at: Timestamp::now(),
        })
    }
}
