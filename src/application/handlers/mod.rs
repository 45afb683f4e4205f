//! Command handlers for the ranking session.

mod adjust_weight;
mod load_dataset;
mod recompute_ranking;

pub use adjust_weight::{AdjustWeightCommand, AdjustWeightHandler, WeightAdjustment};
pub use load_dataset::{LoadDatasetCommand, LoadDatasetHandler};
pub use recompute_ranking::{RecomputeRankingCommand, RecomputeRankingHandler};
