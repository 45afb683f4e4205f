//! Application layer - The session object and its command handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;
pub mod session;

pub use handlers::{
    AdjustWeightCommand, AdjustWeightHandler, LoadDatasetCommand, LoadDatasetHandler,
    RecomputeRankingCommand, RecomputeRankingHandler, WeightAdjustment,
};
pub use session::{CycleOutcome, LoadOutcome, RankingSession, SessionError, SessionSettings};
