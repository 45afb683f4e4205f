//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the ranking core and the outside world. Adapters implement these ports.
//!
//! - `ScoringEngine` / `EngineFactory` - The outranking engine boundary
//! - `RankingPublisher` - The presentation boundary

mod ranking_publisher;
mod scoring_engine;

pub use ranking_publisher::RankingPublisher;
pub use scoring_engine::{EngineError, EngineFactory, EngineInput, ScoringEngine};
