//! Ranking Module - Pure domain services around the outranking engine.
//!
//! Everything here is deterministic and free of I/O: the engine itself sits
//! behind the `ScoringEngine` port.
//!
//! # Components
//!
//! - `DataIngestor` - Row filtering, truncation and display labels
//! - `MatrixBuilder` - Column-major score matrix and engine parameters
//! - `WeightVector` - Per-criterion weights with bounds and step snapping
//! - `RankSelector` - Top-N selection with a configurable tie policy
//! - `ResultPresenter` - Ranked table and load summary formatting
//! - `RankingSnapshot` - Outcome of one recompute cycle

mod errors;
mod ingest;
mod matrix;
mod presenter;
mod selector;
mod snapshot;
mod tables;
mod weights;

pub use errors::{LoadError, ShapeError, WeightError};
pub use ingest::{parse_cell, raw_table, DataIngestor, LoadedData};
pub use matrix::{transpose, CriteriaParameters, MatrixBuilder, ParameterRow, ScoreMatrix};
pub use presenter::{
    format_identifier, format_number, LoadSummary, RankingTable, ResultPresenter, SCORE_COLUMN,
};
pub use selector::{RankSelector, TiePolicy};
pub use snapshot::RankingSnapshot;
pub use tables::{
    normalize_label, AlternativesTable, CriteriaTable, DisplayColumns, RawRow, RawTable,
};
pub use weights::{NudgeDirection, WeightBounds, WeightVector};
