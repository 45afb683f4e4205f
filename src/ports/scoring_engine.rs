//! Scoring Engine Port - Interface for the outranking engine.
//!
//! The engine computes pairwise preference degrees and net outranking
//! scores (PROMETHEE II style). The core only ever makes the four calls
//! below, and for every interaction it makes them in this order:
//!
//! ```text
//! recompute -> apply_weights -> scores
//! ```
//!
//! Skipping `recompute` leaves `apply_weights` aggregating stale pairwise data.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::ranking::CriteriaParameters;

/// Everything the engine needs at construction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineInput {
    /// Column-major scores flattened criterion by criterion.
    pub matrix: Vec<f64>,
    pub criterion_count: usize,
    pub alternative_count: usize,
    /// Opaque per-criterion configuration, passed through verbatim.
    pub parameters: CriteriaParameters,
}

impl EngineInput {
    /// Checks `matrix.len() == criterion_count * alternative_count`.
    pub fn check_shape(&self) -> Result<(), EngineError> {
        let expected = self.criterion_count * self.alternative_count;
        if self.matrix.len() != expected {
            return Err(EngineError::InvalidShape {
                expected,
                actual: self.matrix.len(),
            });
        }
        Ok(())
    }
}

/// Port for one constructed engine instance.
///
/// A single instance is owned by a session and is never driven by two
/// cycles at once; the session serializes access.
pub trait ScoringEngine: Send {
    /// Recomputes the pairwise preference structure from unweighted criteria.
    fn recompute(&mut self) -> Result<(), EngineError>;

    /// Recombines the cached pairwise structure with the given weights.
    fn apply_weights(&mut self, weights: &[f64]) -> Result<(), EngineError>;

    /// Last computed net score per alternative, in alternatives-table order.
    fn scores(&self) -> Vec<f64>;
}

/// Port for constructing engines from a loaded dataset.
pub trait EngineFactory: Send + Sync {
    /// Builds an engine, rejecting malformed matrices or parameters.
    fn construct(&self, input: EngineInput) -> Result<Box<dyn ScoringEngine>, EngineError>;
}

/// Engine failures. None of them are transient; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("Matrix has {actual} values, expected {expected}")]
    InvalidShape { expected: usize, actual: usize },

    #[error("Invalid criteria parameters: {0}")]
    InvalidParameters(String),

    #[error("Expected {expected} weights, got {actual}")]
    WeightCount { expected: usize, actual: usize },

    #[error("Pairwise preferences have not been computed")]
    NotComputed,

    #[error("Engine failure: {0}")]
    Internal(String),
}

impl EngineError {
    /// Creates an invalid parameters error.
    pub fn invalid_parameters(message: impl Into<String>) -> Self {
        EngineError::InvalidParameters(message.into())
    }
}

impl From<EngineError> for DomainError {
    fn from(err: EngineError) -> Self {
        let code = match err {
            EngineError::InvalidShape { .. } | EngineError::InvalidParameters(_) => {
                ErrorCode::EngineRejected
            }
            _ => ErrorCode::EngineFailure,
        };
        DomainError::new(code, err.to_string())
    }
}
