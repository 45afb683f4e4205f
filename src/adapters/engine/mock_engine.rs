//! Mock scoring engine for testing.
//!
//! Records every port call in a log shared between the factory and all
//! engines it builds, so tests can assert the exact call sequence.
//!
//! # Example
//!
//! ```ignore
//! let factory = MockEngineFactory::new().with_scores(vec![0.1, 0.9, 0.5]);
//! let session = RankingSession::new(Arc::new(factory.clone()), settings);
//! // ...
//! assert_eq!(factory.calls().last(), Some(&EngineCall::Scores));
//! ```

use std::sync::{Arc, Mutex};

use crate::ports::{EngineError, EngineFactory, EngineInput, ScoringEngine};

/// One recorded call on the engine port.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCall {
    Construct { criterion_count: usize, alternative_count: usize },
    Recompute,
    ApplyWeights(Vec<f64>),
    Scores,
}

/// Factory producing [`MockScoringEngine`]s.
#[derive(Debug, Clone, Default)]
pub struct MockEngineFactory {
    scores: Option<Vec<f64>>,
    construct_error: Option<EngineError>,
    recompute_error: Arc<Mutex<Option<EngineError>>>,
    calls: Arc<Mutex<Vec<EngineCall>>>,
}

impl MockEngineFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixed scores returned by every engine. Without this, an engine
    /// scores alternative `i` as `i`.
    pub fn with_scores(mut self, scores: Vec<f64>) -> Self {
        self.scores = Some(scores);
        self
    }

    /// Makes `construct` fail.
    pub fn failing_construct(mut self, error: EngineError) -> Self {
        self.construct_error = Some(error);
        self
    }

    /// Switches `recompute` failures on or off for all engines already built.
    pub fn fail_recompute(&self, error: Option<EngineError>) {
        *self.recompute_error.lock().unwrap() = error;
    }

    /// Snapshot of the call log.
    pub fn calls(&self) -> Vec<EngineCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls other than construction, in order.
    pub fn cycle_calls(&self) -> Vec<EngineCall> {
        self.calls()
            .into_iter()
            .filter(|c| !matches!(c, EngineCall::Construct { .. }))
            .collect()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Asserts that the call log matches.
    ///
    /// # Panics
    ///
    /// Panics if the recorded calls differ from `expected`.
    pub fn expect_calls(&self, expected: &[EngineCall]) {
        assert_eq!(self.calls(), expected);
    }

    fn record(&self, call: EngineCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl EngineFactory for MockEngineFactory {
    fn construct(&self, input: EngineInput) -> Result<Box<dyn ScoringEngine>, EngineError> {
        self.record(EngineCall::Construct {
            criterion_count: input.criterion_count,
            alternative_count: input.alternative_count,
        });
        if let Some(err) = &self.construct_error {
            return Err(err.clone());
        }
        input.check_shape()?;

        let scores = self
            .scores
            .clone()
            .unwrap_or_else(|| (0..input.alternative_count).map(|i| i as f64).collect());

        Ok(Box::new(MockScoringEngine {
            scores,
            criterion_count: input.criterion_count,
            computed: false,
            recompute_error: Arc::clone(&self.recompute_error),
            calls: Arc::clone(&self.calls),
        }))
    }
}

/// Engine returning preconfigured scores.
#[derive(Debug)]
pub struct MockScoringEngine {
    scores: Vec<f64>,
    criterion_count: usize,
    computed: bool,
    recompute_error: Arc<Mutex<Option<EngineError>>>,
    calls: Arc<Mutex<Vec<EngineCall>>>,
}

impl ScoringEngine for MockScoringEngine {
    fn recompute(&mut self) -> Result<(), EngineError> {
        self.calls.lock().unwrap().push(EngineCall::Recompute);
        if let Some(err) = self.recompute_error.lock().unwrap().clone() {
            return Err(err);
        }
        self.computed = true;
        Ok(())
    }

    fn apply_weights(&mut self, weights: &[f64]) -> Result<(), EngineError> {
        self.calls
            .lock()
            .unwrap()
            .push(EngineCall::ApplyWeights(weights.to_vec()));
        if weights.len() != self.criterion_count {
            return Err(EngineError::WeightCount {
                expected: self.criterion_count,
                actual: weights.len(),
            });
        }
        if !self.computed {
            return Err(EngineError::NotComputed);
        }
        Ok(())
    }

    fn scores(&self) -> Vec<f64> {
        self.calls.lock().unwrap().push(EngineCall::Scores);
        self.scores.clone()
    }
}
