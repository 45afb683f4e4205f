//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `engine` - Scoring engines (PROMETHEE II, mock)
//! - `presentation` - Ranking publishers (terminal, in-memory)
//! - `dataset` - Dataset files (JSON, YAML)
//! - `cli` - Terminal command parsing

pub mod cli;
pub mod dataset;
pub mod engine;
pub mod presentation;

pub use cli::{CommandError, TerminalCommand};
pub use dataset::{DatasetError, DatasetFile, DatasetFormat};
pub use engine::{
    EngineCall, MockEngineFactory, MockScoringEngine, PreferenceFunction, PrometheeEngine,
    PrometheeEngineFactory,
};
pub use presentation::{render_table, InMemoryRankingPublisher, Published, TerminalPublisher};
