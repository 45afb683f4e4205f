//! Scoring engine adapters.
//!
//! - `promethee` - PROMETHEE II engine running on a rayon pool
//! - `mock_engine` - Call-recording engine for tests

mod mock_engine;
mod preference;
mod promethee;

pub use mock_engine::{EngineCall, MockEngineFactory, MockScoringEngine};
pub use preference::PreferenceFunction;
pub use promethee::{PrometheeEngine, PrometheeEngineFactory};
